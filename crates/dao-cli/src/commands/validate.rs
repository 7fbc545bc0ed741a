use anyhow::bail;
use dao_core::EntityKind;
use dao_schema::{SchemaError, SchemaRegistry};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::parse_kind;
use crate::input::read_values;
use crate::output::output;

/// Outcome for one input record.
#[derive(Debug, Serialize)]
struct RecordReport {
    index: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// Handle `dao validate`.
///
/// Prints one report per record and fails when any record is invalid.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.input.kind)?;
    let records = read_values(&args.input.file, args.input.jsonl)?;
    let registry = SchemaRegistry::new();

    let reports: Vec<RecordReport> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(&registry, kind, index, record))
        .collect();
    output(&reports, flags.format)?;

    let failed = reports.iter().filter(|report| !report.valid).count();
    if failed > 0 {
        bail!("{failed} of {} {kind} records failed validation", reports.len());
    }
    Ok(())
}

fn validate_record(
    registry: &SchemaRegistry,
    kind: EntityKind,
    index: usize,
    record: Value,
) -> RecordReport {
    let errors = match kind.decode_value(record) {
        Err(error) => vec![error.to_string()],
        Ok(canonical) => match registry.validate_dictionary(kind, &canonical) {
            Ok(()) => Vec::new(),
            Err(SchemaError::ValidationFailed { errors }) => errors,
            Err(other) => vec![other.to_string()],
        },
    };
    tracing::debug!(index, kind = %kind, errors = errors.len(), "validated record");

    RecordReport {
        index,
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn well_typed_record_is_valid() {
        let registry = SchemaRegistry::new();
        let record = json!({"id": "d-1", "priority": 75, "title": {"en": "Rules"}});

        let report = validate_record(&registry, EntityKind::Document, 0, record);

        assert!(report.valid, "{:?}", report.errors);
    }

    #[test]
    fn strict_decode_rejects_loose_types() {
        let registry = SchemaRegistry::new();
        let record = json!({"id": "d-1", "priority": "high"});

        let report = validate_record(&registry, EntityKind::Document, 3, record);

        assert_eq!(report.index, 3);
        assert!(!report.valid);
        assert!(report.errors[0].contains("document"));
    }

    #[test]
    fn non_object_record_is_invalid() {
        let registry = SchemaRegistry::new();
        let report = validate_record(&registry, EntityKind::Faq, 0, json!([1, 2]));
        assert!(!report.valid);
    }
}
