use std::collections::BTreeSet;

use anyhow::Context;
use dao_config::DaoConfig;
use dao_core::ids::IdGenerator;
use dao_core::{DataDictionary, EntityKind};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DiffArgs;
use crate::commands::parse_kind;
use crate::input::read_dictionary;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct DiffReport {
    kind: &'static str,
    differs: bool,
    /// Top-level keys whose canonical values differ.
    keys: Vec<String>,
}

/// Handle `dao diff`.
pub fn handle(args: &DiffArgs, config: &DaoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let left = read_dictionary(&args.left)?;
    let right = read_dictionary(&args.right)?;
    let ids = config.ids.generator();

    let report = compare(kind, &left, &right, ids.as_ref())
        .context("both inputs must be non-empty objects")?;
    output(&report, flags.format)
}

/// Keys missing from both inputs take the left side's generated defaults on
/// both sides, so fresh ids and timestamps do not count as differences.
/// `None` when either input is empty.
fn compare(
    kind: EntityKind,
    left: &DataDictionary,
    right: &DataDictionary,
    ids: &dyn IdGenerator,
) -> Option<DiffReport> {
    if right.is_empty() {
        return None;
    }
    let left_canonical = kind.normalize_with(left, ids)?;

    let mut right_filled = right.clone();
    for (key, value) in &left_canonical {
        if !left.contains_key(key) && !right.contains_key(key) {
            right_filled.insert(key.clone(), value.clone());
        }
    }
    let right_canonical = kind.normalize_with(&right_filled, ids)?;

    let differs = kind.differs(&left_canonical, &right_canonical, ids)?;
    let keys = left_canonical
        .keys()
        .chain(right_canonical.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|key| left_canonical.get(*key) != right_canonical.get(*key))
        .cloned()
        .collect();

    Some(DiffReport {
        kind: kind.as_str(),
        differs,
        keys,
    })
}
