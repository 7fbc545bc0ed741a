use dao_config::DaoConfig;
use dao_core::ids::IdGenerator;
use dao_core::{DataDictionary, EntityKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeArgs;
use crate::commands::parse_kind;
use crate::input::read_dictionaries;
use crate::output::output;

/// Handle `dao normalize`.
pub fn handle(args: &NormalizeArgs, config: &DaoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.input.kind)?;
    let records = read_dictionaries(&args.input.file, args.input.jsonl)?;
    let ids = config.ids.generator();

    let normalized = normalize_all(kind, &records, ids.as_ref());
    tracing::debug!(
        kind = %kind,
        records = records.len(),
        normalized = normalized.len(),
        "normalized records"
    );
    output(&normalized, flags.format)
}

/// Canonical dictionaries for every non-empty record; empty records are
/// dropped with a warning.
fn normalize_all(
    kind: EntityKind,
    records: &[DataDictionary],
    ids: &dyn IdGenerator,
) -> Vec<DataDictionary> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let normalized = kind.normalize_with(record, ids);
            if normalized.is_none() {
                tracing::warn!(index, kind = %kind, "skipping empty record");
            }
            normalized
        })
        .collect()
}
