//! The contract every data object implements, and the base fields they share.
//!
//! Entities embed a [`BaseObject`] (flattened into their JSON form) and
//! implement [`Dao`] through [`impl_dao!`](crate::impl_dao), which supplies the
//! base plumbing and takes only the per-entity field reads.

use std::any::Any;
use std::fmt;
use std::ptr;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::dictionary::{DataDictionary, DataReader};
use crate::entities::AnalyticsData;
use crate::ids::{IdGenerator, UuidIds};
use crate::types::Metadata;

/// Fields shared by every entity: identifier, metadata, and analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseObject {
    pub id: String,
    pub meta: Metadata,
    pub analytics_data: Vec<AnalyticsData>,
}

impl BaseObject {
    /// Fresh base with an id and metadata uid from `ids`.
    #[must_use]
    pub fn new_with(ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            meta: Metadata::new_with(ids),
            analytics_data: Vec::new(),
        }
    }

    /// Overlay the base keys present in `reader`.
    pub fn read_base(&mut self, reader: &DataReader<'_>) {
        reader.read("id", &mut self.id);
        reader.read("meta", &mut self.meta);
        reader.read("analyticsData", &mut self.analytics_data);
    }
}

impl Default for BaseObject {
    fn default() -> Self {
        Self::new_with(&UuidIds)
    }
}

/// Behaviour shared by all data objects.
///
/// Copying is [`Clone`] and equality is [`PartialEq`]; both are deep. The
/// remaining operations are provided on top of the four required methods.
pub trait Dao:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + JsonSchema + 'static
{
    /// Stable `snake_case` name of the entity kind.
    const KIND: &'static str;

    fn base(&self) -> &BaseObject;

    fn base_mut(&mut self) -> &mut BaseObject;

    /// An instance with the given base and every other field at its default.
    fn from_base(base: BaseObject) -> Self;

    /// Overlay the entity-specific keys present in `reader`.
    fn read_fields(&mut self, reader: &DataReader<'_>);

    fn id(&self) -> &str {
        &self.base().id
    }

    fn meta(&self) -> &Metadata {
        &self.base().meta
    }

    /// Default instance whose ids come from `ids`.
    fn new_with(ids: &dyn IdGenerator) -> Self {
        Self::from_base(BaseObject::new_with(ids))
    }

    /// Default instance with a caller-supplied id.
    fn with_id(id: impl Into<String>) -> Self {
        Self::with_id_with(id, &UuidIds)
    }

    /// Default instance with a caller-supplied id. Every other generated id,
    /// such as the metadata uid, comes from `ids`.
    fn with_id_with(id: impl Into<String>, ids: &dyn IdGenerator) -> Self {
        let mut this = Self::new_with(ids);
        this.base_mut().id = id.into();
        this
    }

    /// Parse with the default UUID generator. See [`Dao::from_dictionary_with`].
    fn from_dictionary(data: &DataDictionary) -> Option<Self> {
        Self::from_dictionary_with(data, &UuidIds)
    }

    /// Lenient parse of an untyped dictionary.
    ///
    /// Returns `None` for an empty dictionary. Missing or malformed keys keep
    /// the defaults of a fresh instance built from `ids`.
    fn from_dictionary_with(data: &DataDictionary, ids: &dyn IdGenerator) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let mut this = Self::new_with(ids);
        this.apply_dictionary_with(data, ids);
        Some(this)
    }

    /// Overlay the keys present in `data` onto this instance.
    fn apply_dictionary(&mut self, data: &DataDictionary) {
        self.apply_dictionary_with(data, &UuidIds);
    }

    fn apply_dictionary_with(&mut self, data: &DataDictionary, ids: &dyn IdGenerator) {
        let reader = DataReader::new(data, ids);
        self.base_mut().read_base(&reader);
        self.read_fields(&reader);
    }

    /// Untyped form with `camelCase` keys. Never fails: a serializer error is
    /// logged and yields an empty dictionary.
    fn as_dictionary(&self) -> DataDictionary {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!(kind = Self::KIND, ?other, "entity did not serialize to an object");
                DataDictionary::new()
            }
            Err(error) => {
                tracing::warn!(kind = Self::KIND, %error, "entity failed to serialize");
                DataDictionary::new()
            }
        }
    }

    /// Copy every field of `source` onto `self`.
    fn update(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// `true` for `None` or a value of another type, `false` for this very
    /// instance, otherwise whether any field differs.
    fn is_diff_from(&self, rhs: Option<&dyn Any>) -> bool {
        let Some(other) = rhs.and_then(<dyn Any>::downcast_ref::<Self>) else {
            return true;
        };
        if ptr::eq(self, other) {
            return false;
        }
        self != other
    }
}

impl Dao for BaseObject {
    const KIND: &'static str = "base_object";

    fn base(&self) -> &BaseObject {
        self
    }

    fn base_mut(&mut self) -> &mut BaseObject {
        self
    }

    fn from_base(base: BaseObject) -> Self {
        base
    }

    fn read_fields(&mut self, _reader: &DataReader<'_>) {}
}

crate::from_data_via_dictionary!(BaseObject);

/// Implement [`Dao`] for an entity with a `base: BaseObject` field.
///
/// ```ignore
/// impl_dao!(Faq, "faq", |faq, r| {
///     r.read("question", &mut faq.question);
/// });
/// ```
#[macro_export]
macro_rules! impl_dao {
    ($ty:ty, $kind:literal) => {
        $crate::impl_dao!($ty, $kind, |_this, _reader| {});
    };
    ($ty:ty, $kind:literal, |$this:ident, $reader:ident| $body:block) => {
        impl $crate::dao::Dao for $ty {
            const KIND: &'static str = $kind;

            fn base(&self) -> &$crate::dao::BaseObject {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::dao::BaseObject {
                &mut self.base
            }

            fn from_base(base: $crate::dao::BaseObject) -> Self {
                Self {
                    base,
                    ..Self::default()
                }
            }

            fn read_fields(&mut self, $reader: &$crate::dictionary::DataReader<'_>) {
                let $this = self;
                $body
            }
        }

        $crate::from_data_via_dictionary!($ty);
    };
}
