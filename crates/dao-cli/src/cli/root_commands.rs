use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every entity kind.
    Kinds,
    /// Print the JSON Schema for a kind or value type.
    Schema(SchemaArgs),
    /// Lenient parse of dictionaries into their canonical form.
    Normalize(NormalizeArgs),
    /// Strict decode plus schema validation.
    Validate(ValidateArgs),
    /// Compare two dictionaries of the same kind.
    Diff(DiffArgs),
}

/// Arguments for `dao schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Kind or value-type name (e.g. `pricing_tier`, `localized_string`).
    pub type_name: String,
}

/// Input records shared by `normalize` and `validate`.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// Entity kind name.
    pub kind: String,
    /// JSON file holding one object or an array of objects; `-` reads stdin.
    pub file: PathBuf,
    /// Read one JSON object per line instead.
    #[arg(long)]
    pub jsonl: bool,
}

/// Arguments for `dao normalize`.
#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for `dao validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for `dao diff`.
#[derive(Clone, Debug, Args)]
pub struct DiffArgs {
    /// Entity kind name.
    pub kind: String,
    /// Left-hand JSON object file.
    pub left: PathBuf,
    /// Right-hand JSON object file.
    pub right: PathBuf,
}
