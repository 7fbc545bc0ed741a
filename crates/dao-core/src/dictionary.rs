//! Lenient translation from untyped dictionaries into typed fields.
//!
//! A [`DataDictionary`] is the interchange shape used by persistence and
//! transport layers: string keys, JSON values. Parsing is forgiving by design
//! of the format: a missing key or a value of the wrong shape leaves the
//! current field value in place instead of failing the whole record.
//!
//! Accepted coercions:
//! - integers from floats (truncated) and from numeric strings
//! - floats from integers and numeric strings
//! - booleans from numbers (`0` is false) and from `"true"`/`"false"`/`"yes"`/`"no"`/`"1"`/`"0"`
//! - strings from numbers and booleans
//! - timestamps from RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD`, or Unix seconds

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::ids::IdGenerator;

/// String-keyed, heterogeneously-valued map used for interchange.
pub type DataDictionary = serde_json::Map<String, Value>;

/// Parse a value of type `Self` out of an untyped JSON value.
///
/// Returns `None` when the value has the wrong shape. Callers treat `None` as
/// "keep the default".
pub trait FromData: Sized {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self>;
}

/// Field-by-field reader over one dictionary.
pub struct DataReader<'a> {
    data: &'a DataDictionary,
    ids: &'a dyn IdGenerator,
}

impl<'a> DataReader<'a> {
    #[must_use]
    pub fn new(data: &'a DataDictionary, ids: &'a dyn IdGenerator) -> Self {
        Self { data, ids }
    }

    /// Id generator used for nested objects that need a default id.
    #[must_use]
    pub fn ids(&self) -> &'a dyn IdGenerator {
        self.ids
    }

    /// Raw value for `key`, treating JSON `null` as absent.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }

    /// Parse `key` into a fresh value.
    #[must_use]
    pub fn get<T: FromData>(&self, key: &str) -> Option<T> {
        let value = self.raw(key)?;
        let parsed = T::from_data(value, self.ids);
        if parsed.is_none() {
            tracing::trace!(key, "malformed dictionary value; keeping default");
        }
        parsed
    }

    /// Overwrite `slot` with the parsed value of `key`, if present and well-formed.
    pub fn read<T: FromData>(&self, key: &str, slot: &mut T) {
        if let Some(value) = self.get(key) {
            *slot = value;
        }
    }

    /// Read a weak back-reference stored either as `{id_key: "..."}` or as the
    /// legacy nested object form `{nested_key: {"id": "..."}}`.
    pub fn read_reference(&self, id_key: &str, nested_key: &str, slot: &mut String) {
        if let Some(id) = self.get::<String>(id_key) {
            *slot = id;
            return;
        }
        if let Some(id) = self
            .raw(nested_key)
            .and_then(Value::as_object)
            .and_then(|nested| nested.get("id"))
            .and_then(|id| String::from_data(id, self.ids))
        {
            *slot = id;
        }
    }
}

/// Build a value record from a nested object, starting from `init` and letting
/// `fill` read its fields. Returns `None` when `value` is not an object.
pub fn read_record<T>(
    value: &Value,
    ids: &dyn IdGenerator,
    init: T,
    fill: impl FnOnce(&DataReader<'_>, &mut T),
) -> Option<T> {
    let data = value.as_object()?;
    let reader = DataReader::new(data, ids);
    let mut record = init;
    fill(&reader, &mut record);
    Some(record)
}

/// Parse a timestamp from any of the accepted encodings.
#[must_use]
pub fn parse_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_time_str(s.trim()),
        Value::Number(n) => {
            let secs = n.as_f64()?;
            if !secs.is_finite() {
                return None;
            }
            #[allow(clippy::cast_possible_truncation)]
            let whole = secs.floor() as i64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let nanos = ((secs - secs.floor()) * 1_000_000_000.0).round() as u32;
            DateTime::from_timestamp(whole, nanos.min(999_999_999))
        }
        _ => None,
    }
}

fn parse_time_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// Scalar impls
// ---------------------------------------------------------------------------

impl FromData for String {
    fn from_data(value: &Value, _ids: &dyn IdGenerator) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl FromData for bool {
    fn from_data(value: &Value, _ids: &dyn IdGenerator) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|f| f != 0.0),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromData for i64 {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                let f = n.as_f64()?;
                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                let in_range = f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64;
                #[allow(clippy::cast_possible_truncation)]
                in_range.then(|| f.trunc() as i64)
            }),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    let f = s.parse::<f64>().ok()?;
                    Self::from_data(&Value::from(f), ids)
                })
            }
            _ => None,
        }
    }
}

macro_rules! from_data_via_i64 {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromData for $ty {
                fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
                    i64::from_data(value, ids).and_then(|n| Self::try_from(n).ok())
                }
            }
        )+
    };
}

from_data_via_i64!(i32, u32, u64);

impl FromData for f64 {
    fn from_data(value: &Value, _ids: &dyn IdGenerator) -> Option<Self> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<Self>().ok(),
            _ => None,
        };
        parsed.filter(|f| f.is_finite())
    }
}

impl FromData for DateTime<Utc> {
    fn from_data(value: &Value, _ids: &dyn IdGenerator) -> Option<Self> {
        parse_time(value)
    }
}

impl FromData for Value {
    fn from_data(value: &Value, _ids: &dyn IdGenerator) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromData for DataDictionary {
    fn from_data(value: &Value, _ids: &dyn IdGenerator) -> Option<Self> {
        value.as_object().cloned()
    }
}

// ---------------------------------------------------------------------------
// Container impls
// ---------------------------------------------------------------------------

impl<T: FromData> FromData for Option<T> {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        T::from_data(value, ids).map(Some)
    }
}

impl<T: FromData> FromData for Box<T> {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        T::from_data(value, ids).map(Box::new)
    }
}

/// Arrays keep the well-formed elements and skip the rest.
impl<T: FromData> FromData for Vec<T> {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        let items = value.as_array()?;
        Some(items.iter().filter_map(|item| T::from_data(item, ids)).collect())
    }
}

impl<T: FromData> FromData for BTreeMap<String, T> {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        let entries = value.as_object()?;
        Some(
            entries
                .iter()
                .filter_map(|(key, item)| T::from_data(item, ids).map(|v| (key.clone(), v)))
                .collect(),
        )
    }
}

/// Implement [`FromData`] for entities by parsing a nested dictionary through
/// the entity's own constructor, so an empty nested object yields no instance.
#[macro_export]
macro_rules! from_data_via_dictionary {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::dictionary::FromData for $ty {
                fn from_data(
                    value: &::serde_json::Value,
                    ids: &dyn $crate::ids::IdGenerator,
                ) -> Option<Self> {
                    <$ty as $crate::dao::Dao>::from_dictionary_with(value.as_object()?, ids)
                }
            }
        )+
    };
}

/// Implement [`FromData`] for serde-backed enums by deserializing the raw value.
#[macro_export]
macro_rules! from_data_via_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::dictionary::FromData for $ty {
                fn from_data(
                    value: &::serde_json::Value,
                    _ids: &dyn $crate::ids::IdGenerator,
                ) -> Option<Self> {
                    ::serde_json::from_value(value.clone()).ok()
                }
            }
        )+
    };
}
