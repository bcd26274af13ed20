use serde::{Deserialize, Serialize};

use crate::model::ids::ActId;

/// Performance locations for one act, keyed by the act's catalog position.
///
/// The same shape is served inside the `/locations` index and, standalone,
/// at an act's own `locations` link.
///
/// Location strings are free-form and use underscores as word separators
/// (`"north_carolina-usa"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: ActId,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub dates: String,
}

impl LocationRecord {
    #[must_use]
    pub fn new<I, S>(id: i64, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: ActId::new(id),
            locations: locations.into_iter().map(Into::into).collect(),
            dates: String::new(),
        }
    }
}

/// Envelope of the upstream `/locations` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsPayload {
    #[serde(default)]
    pub index: Vec<LocationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_record_new() {
        let record = LocationRecord::new(2, ["new_york-usa", "paris-france"]);
        assert_eq!(record.id, ActId::new(2));
        assert_eq!(record.locations, vec!["new_york-usa", "paris-france"]);
    }

    #[test]
    fn test_locations_payload_deserializes() {
        let json = r#"{"index":[
            {"id":1,"locations":["north_carolina-usa","georgia-usa"],"dates":"https://example.test/dates/1"},
            {"id":2,"locations":[]}
        ]}"#;

        let payload: LocationsPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.index.len(), 2);
        assert_eq!(payload.index[0].locations[0], "north_carolina-usa");
        assert!(payload.index[1].dates.is_empty());
    }

    #[test]
    fn test_locations_payload_rejects_wrong_shape() {
        let result = serde_json::from_str::<LocationsPayload>(r#"{"index": "nope"}"#);
        assert!(result.is_err());
    }
}
