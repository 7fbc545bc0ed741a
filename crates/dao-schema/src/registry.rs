//! Central schema registry for all data-object types.
//!
//! The `SchemaRegistry` builds JSON Schemas from dao-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.
//! Entity schemas are keyed by their kind name (`"pricing_tier"`); value types
//! by their `snake_case` type name (`"localized_string"`).

use std::collections::HashMap;

use dao_core::dao::Dao;
use dao_core::dictionary::DataDictionary;
use dao_core::kinds::EntityKind;
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Central store of every data-object JSON Schema.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    /// Build a registry with one schema per entity kind and per value type.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity kinds ---
        for kind in EntityKind::ALL {
            schemas.insert(kind.as_str(), Value::from(kind.json_schema()));
        }

        // --- Value types ---
        register!(schemas, "metadata", dao_core::types::Metadata);
        register!(schemas, "localized_string", dao_core::types::LocalizedString);
        register!(schemas, "priority", dao_core::types::Priority);
        register!(schemas, "price", dao_core::types::Price);
        register!(schemas, "time_of_day", dao_core::types::TimeOfDay);
        register!(schemas, "daily_hours", dao_core::types::DailyHours);
        register!(schemas, "person_name", dao_core::types::PersonName);
        register!(schemas, "postal_address", dao_core::types::PostalAddress);
        register!(schemas, "geo_point", dao_core::types::GeoPoint);
        register!(
            schemas,
            "analytics_numbers",
            dao_core::types::AnalyticsNumbers
        );
        register!(schemas, "day_of_week_flags", dao_core::types::DayOfWeekFlags);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate a dictionary against the schema of `kind`.
    ///
    /// # Errors
    ///
    /// See [`SchemaRegistry::validate`].
    pub fn validate_dictionary(
        &self,
        kind: EntityKind,
        data: &DataDictionary,
    ) -> Result<(), SchemaError> {
        self.validate(kind.as_str(), &Value::Object(data.clone()))
    }

    /// Validate the dictionary form of a typed entity.
    ///
    /// # Errors
    ///
    /// See [`SchemaRegistry::validate`].
    pub fn validate_entity<T: Dao>(&self, entity: &T) -> Result<(), SchemaError> {
        self.validate(T::KIND, &Value::Object(entity.as_dictionary()))
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
