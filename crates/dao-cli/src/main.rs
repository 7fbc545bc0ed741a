use anyhow::Context;
use clap::Parser;
use dao_config::DaoConfig;

mod cli;
mod commands;
mod input;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("dao error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = DaoConfig::load_with_dotenv().context("failed to load dao configuration")?;
    init_tracing(cli.quiet, cli.verbose, &config.log.level)?;
    tracing::debug!(?config, "configuration loaded");

    let flags = cli.global_flags(config.output.pretty);
    commands::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("DAO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level(quiet, verbose, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn level(quiet: bool, verbose: bool, configured: &str) -> &str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    }
}
