use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{FromData, read_record};
use crate::ids::IdGenerator;

/// Structured personal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PersonName {
    pub given: String,
    pub middle: String,
    pub family: String,
    pub nickname: String,
}

impl PersonName {
    /// Split a full name on whitespace: the first word is the given name, the
    /// last the family name, and anything in between the middle name.
    #[must_use]
    pub fn from_full_name(full: &str) -> Self {
        let words: Vec<&str> = full.split_whitespace().collect();
        match words.as_slice() {
            [] => Self::default(),
            [given] => Self {
                given: (*given).to_string(),
                ..Self::default()
            },
            [given, middle @ .., family] => Self {
                given: (*given).to_string(),
                middle: middle.join(" "),
                family: (*family).to_string(),
                nickname: String::new(),
            },
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        [&self.given, &self.middle, &self.family]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.given.is_empty()
            && self.middle.is_empty()
            && self.family.is_empty()
            && self.nickname.is_empty()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromData for PersonName {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        if let Some(full) = value.as_str() {
            return Some(Self::from_full_name(full));
        }
        read_record(value, ids, Self::default(), |r, n| {
            r.read("given", &mut n.given);
            r.read("middle", &mut n.middle);
            r.read("family", &mut n.family);
            r.read("nickname", &mut n.nickname);
        })
    }
}
