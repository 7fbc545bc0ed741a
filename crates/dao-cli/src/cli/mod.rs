use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dao` binary.
#[derive(Debug, Parser)]
#[command(name = "dao", version, about = "Data-object toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to the configured `output.pretty`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self, pretty_by_default: bool) -> GlobalFlags {
        let fallback = if pretty_by_default {
            OutputFormat::Json
        } else {
            OutputFormat::Raw
        };
        GlobalFlags {
            format: self.format.unwrap_or(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["dao", "--format", "raw", "--verbose", "kinds"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Kinds));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dao", "kinds", "--format", "json", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["dao", "--format", "table", "kinds"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn format_falls_back_to_config() {
        let cli = Cli::try_parse_from(["dao", "kinds"]).expect("cli should parse");
        assert_eq!(cli.global_flags(true).format, OutputFormat::Json);
        assert_eq!(cli.global_flags(false).format, OutputFormat::Raw);

        let cli = Cli::try_parse_from(["dao", "-f", "raw", "kinds"]).expect("cli should parse");
        assert_eq!(cli.global_flags(true).format, OutputFormat::Raw);
    }

    #[test]
    fn normalize_accepts_jsonl_flag() {
        let cli = Cli::try_parse_from(["dao", "normalize", "faq", "faqs.jsonl", "--jsonl"])
            .expect("cli should parse");
        let Commands::Normalize(args) = cli.command else {
            panic!("expected normalize");
        };
        assert_eq!(args.input.kind, "faq");
        assert_eq!(args.input.file, PathBuf::from("faqs.jsonl"));
        assert!(args.input.jsonl);
    }

    #[test]
    fn diff_takes_two_files() {
        let cli = Cli::try_parse_from(["dao", "diff", "place", "a.json", "b.json"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Diff(ref args) if args.kind == "place"));
    }
}
