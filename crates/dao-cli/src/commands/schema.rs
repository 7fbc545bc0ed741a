use anyhow::Context;
use dao_schema::SchemaRegistry;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `dao schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let schema = lookup(&registry, &args.type_name)?;
    output(schema, flags.format)
}

fn lookup<'a>(registry: &'a SchemaRegistry, type_name: &str) -> anyhow::Result<&'a Value> {
    let name = type_name.trim().to_ascii_lowercase().replace('-', "_");
    registry.get(&name).with_context(|| {
        format!(
            "unknown schema '{type_name}' (known: {})",
            registry.list().join(", ")
        )
    })
}
