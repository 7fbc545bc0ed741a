use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{FromData, read_record};
use crate::ids::IdGenerator;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl PostalAddress {
    /// Single-line form with empty parts omitted.
    #[must_use]
    pub fn single_line(&self) -> String {
        let locality = [self.state.as_str(), self.postal_code.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        [self.street.as_str(), self.city.as_str(), &locality, self.country.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromData for PostalAddress {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        read_record(value, ids, Self::default(), |r, a| {
            r.read("street", &mut a.street);
            r.read("city", &mut a.city);
            r.read("state", &mut a.state);
            r.read("postalCode", &mut a.postal_code);
            r.read("country", &mut a.country);
        })
    }
}

/// WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl FromData for GeoPoint {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        read_record(value, ids, Self::default(), |r, p| {
            r.read("latitude", &mut p.latitude);
            r.read("longitude", &mut p.longitude);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_skips_empty_parts() {
        let address = PostalAddress {
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            country: String::new(),
        };
        assert_eq!(address.single_line(), "1 Main St, Springfield, IL 62701");
        assert_eq!(PostalAddress::default().single_line(), "");
    }
}
