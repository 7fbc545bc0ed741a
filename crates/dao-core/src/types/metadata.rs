use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{DataDictionary, FromData, read_record};
use crate::enums::ReactionType;
use crate::ids::{IdGenerator, UuidIds};

/// Bookkeeping attached to every entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub uid: String,
    pub created: DateTime<Utc>,
    pub synced: Option<DateTime<Utc>>,
    pub updated: DateTime<Utc>,
    pub status: String,
    pub created_by: String,
    pub updated_by: String,
    pub views: u64,
    pub reaction_counts: BTreeMap<String, u64>,
    /// Free-form values that have no dedicated field.
    pub generic_values: DataDictionary,
}

impl Metadata {
    /// Fresh metadata stamped with the current time.
    #[must_use]
    pub fn new_with(ids: &dyn IdGenerator) -> Self {
        let now = Utc::now();
        Self {
            uid: ids.next_id(),
            created: now,
            synced: None,
            updated: now,
            status: String::new(),
            created_by: String::new(),
            updated_by: String::new(),
            views: 0,
            reaction_counts: BTreeMap::new(),
            generic_values: DataDictionary::new(),
        }
    }

    /// Bump `updated` to now and record who made the change.
    pub fn touch(&mut self, by: impl Into<String>) {
        self.updated = Utc::now();
        self.updated_by = by.into();
    }

    /// Increment the counter for `reaction`, returning the new total.
    pub fn react(&mut self, reaction: impl Into<String>) -> u64 {
        let count = self.reaction_counts.entry(reaction.into()).or_insert(0);
        *count += 1;
        *count
    }

    /// Recorded count for `reaction`, zero when never seen.
    #[must_use]
    pub fn reactions(&self, reaction: ReactionType) -> u64 {
        self.reaction_counts.get(reaction.as_str()).copied().unwrap_or(0)
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new_with(&UuidIds)
    }
}

impl FromData for Metadata {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        read_record(value, ids, Self::new_with(ids), |r, meta| {
            r.read("uid", &mut meta.uid);
            r.read("created", &mut meta.created);
            r.read("synced", &mut meta.synced);
            r.read("updated", &mut meta.updated);
            r.read("status", &mut meta.status);
            r.read("createdBy", &mut meta.created_by);
            r.read("updatedBy", &mut meta.updated_by);
            r.read("views", &mut meta.views);
            r.read("reactionCounts", &mut meta.reaction_counts);
            r.read("genericValues", &mut meta.generic_values);
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn new_metadata_uses_injected_ids() {
        let ids = SequentialIds::new("uid");
        let meta = Metadata::new_with(&ids);
        assert_eq!(meta.uid, "uid-1");
        assert_eq!(meta.created, meta.updated);
        assert!(meta.synced.is_none());
    }

    #[test]
    fn parses_counters_and_keeps_defaults() {
        let ids = SequentialIds::new("uid");
        let meta = Metadata::from_data(
            &json!({
                "uid": "m-1",
                "views": "12",
                "reactionCounts": {"like": 3, "bad": "x"},
                "synced": "2024-01-01 00:00:00",
                "createdBy": 7
            }),
            &ids,
        )
        .unwrap();
        assert_eq!(meta.uid, "m-1");
        assert_eq!(meta.views, 12);
        assert_eq!(meta.reaction_counts.get("like"), Some(&3));
        assert!(!meta.reaction_counts.contains_key("bad"));
        assert!(meta.synced.is_some());
        assert_eq!(meta.created_by, "7");
    }

    #[test]
    fn react_counts_up() {
        let mut meta = Metadata::default();
        assert_eq!(meta.react("like"), 1);
        assert_eq!(meta.react("like"), 2);
        assert_eq!(meta.react(ReactionType::Loved), 1);
        assert_eq!(meta.reactions(ReactionType::Loved), 1);
        assert_eq!(meta.reactions(ReactionType::Angered), 0);
        meta.touch("admin");
        assert_eq!(meta.updated_by, "admin");
    }
}
