pub mod diff;
pub mod kinds;
pub mod normalize;
pub mod schema;
pub mod validate;

use anyhow::Context;
use dao_config::DaoConfig;
use dao_core::EntityKind;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &DaoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Kinds => kinds::handle(flags),
        Commands::Schema(args) => schema::handle(args, flags),
        Commands::Normalize(args) => normalize::handle(args, config, flags),
        Commands::Validate(args) => validate::handle(args, flags),
        Commands::Diff(args) => diff::handle(args, config, flags),
    }
}

/// Parse a kind name, listing the valid names on failure.
pub fn parse_kind(raw: &str) -> anyhow::Result<EntityKind> {
    raw.parse::<EntityKind>()
        .with_context(|| "run 'dao kinds' for the list of kind names")
}
