use serde::{Deserialize, Serialize};

use crate::model::ids::ActId;

/// A musical act (band or solo artist) as served by the upstream catalog.
///
/// Field names follow the upstream JSON (`creationDate`, `firstAlbum`, ...).
/// The `locations`, `concert_dates` and `relations` fields are links to
/// per-act detail documents. Searching never follows them; it consults the
/// separately fetched location index instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Act {
    pub id: ActId,
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,

    /// Year the act was formed.
    pub creation_date: i32,

    /// Title (upstream: release date) of the debut album.
    #[serde(default)]
    pub first_album: String,

    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub concert_dates: String,
    #[serde(default)]
    pub relations: String,
}

impl Act {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, creation_date: i32) -> Self {
        Self {
            id: ActId::new(id),
            image: String::new(),
            name: name.into(),
            members: Vec::new(),
            creation_date,
            first_album: String::new(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    #[must_use]
    pub fn with_first_album(mut self, first_album: impl Into<String>) -> Self {
        self.first_album = first_album.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_act_new() {
        let act = Act::new(1, "Queen", 1970);
        assert_eq!(act.name, "Queen");
        assert_eq!(act.id, ActId::new(1));
        assert!(act.members.is_empty());
    }

    #[test]
    fn test_act_builder() {
        let act = Act::new(1, "Queen", 1970)
            .with_member("Freddie Mercury")
            .with_member("Brian May")
            .with_first_album("14-12-1973");

        assert_eq!(act.members, vec!["Freddie Mercury", "Brian May"]);
        assert_eq!(act.first_album, "14-12-1973");
    }

    #[test]
    fn test_act_deserializes_upstream_shape() {
        let json = r#"{
            "id": 1,
            "image": "https://groupietrackers.herokuapp.com/api/images/queen.jpeg",
            "name": "Queen",
            "members": ["Freddie Mercury", "Brian May"],
            "creationDate": 1970,
            "firstAlbum": "14-12-1973",
            "locations": "https://groupietrackers.herokuapp.com/api/locations/1",
            "concertDates": "https://groupietrackers.herokuapp.com/api/dates/1",
            "relations": "https://groupietrackers.herokuapp.com/api/relation/1"
        }"#;

        let act: Act = serde_json::from_str(json).unwrap();
        assert_eq!(act.id, ActId::new(1));
        assert_eq!(act.creation_date, 1970);
        assert_eq!(act.first_album, "14-12-1973");
        assert_eq!(act.members.len(), 2);
        assert!(act.concert_dates.ends_with("/dates/1"));
    }

    #[test]
    fn test_act_serializes_camel_case() {
        let json = serde_json::to_value(Act::new(2, "ABBA", 1972)).unwrap();
        assert_eq!(json["creationDate"], 1972);
        assert!(json.get("firstAlbum").is_some());
    }
}
