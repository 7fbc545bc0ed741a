use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dictionary::FromData;
use crate::ids::IdGenerator;

/// Language used when a bare string is assigned or parsed.
pub const DEFAULT_LANGUAGE: &str = "en";

/// User-facing text keyed by language code.
///
/// Serializes as a `{"en": "..."}` map. Deserialization and dictionary parsing
/// also accept a bare string, stored under [`DEFAULT_LANGUAGE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    /// Text in the default language.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(DEFAULT_LANGUAGE.to_string(), text.into());
        Self(map)
    }

    /// Add or replace the translation for `language`.
    #[must_use]
    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(language.into(), text.into());
        self
    }

    /// Text for `language`, if present.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Default-language text, else the first translation, else `""`.
    #[must_use]
    pub fn text(&self) -> &str {
        self.get(DEFAULT_LANGUAGE)
            .or_else(|| self.0.values().next().map(String::as_str))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    #[must_use]
    pub const fn translations(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl From<&str> for LocalizedString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LocalizedString {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl<'de> Deserialize<'de> for LocalizedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Map(BTreeMap<String, String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Self::new(text),
            Repr::Map(map) => Self(map),
        })
    }
}

impl FromData for LocalizedString {
    fn from_data(value: &Value, _ids: &dyn IdGenerator) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::new(text.clone())),
            Value::Object(map) => Some(Self(
                map.iter()
                    .filter_map(|(lang, text)| text.as_str().map(|t| (lang.clone(), t.to_string())))
                    .collect(),
            )),
            _ => None,
        }
    }
}
