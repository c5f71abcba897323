//! Camp wire model and Camp <-> CampModel mapping
//!
//! The location is flattened on the wire (`venue`, `locationAddress1`, ...)
//! and rebuilt into a nested [`Location`] on the way back, so a camp
//! survives a create/get round trip unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use codecamp::{Camp, DomainError, Location};

use super::TalkModel;

/// Shortest allowed camp, in days
pub const MIN_CAMP_LENGTH: i32 = 1;

/// Camp as exposed by the API.
///
/// Every scalar is optional so an update can tell "not sent" apart from
/// "sent"; creation enforces `moniker`, `name` and `eventDate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampModel {
    pub name: Option<String>,
    pub moniker: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub length: Option<i32>,
    /// Last day of the event, derived from `eventDate` and `length`
    #[serde(skip_deserializing)]
    #[schema(read_only)]
    pub end_date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,
    #[serde(default)]
    pub talks: Vec<TalkModel>,
}

impl From<Camp> for CampModel {
    fn from(camp: Camp) -> Self {
        let end_date = camp.end_date();
        let Location {
            venue_name,
            address1,
            address2,
            address3,
            city_town,
            state_province,
            postal_code,
            country,
        } = camp.location;

        Self {
            name: Some(camp.name),
            moniker: Some(camp.moniker),
            description: camp.description,
            event_date: Some(camp.event_date),
            length: Some(camp.length),
            end_date: Some(end_date),
            venue: venue_name,
            location_address1: address1,
            location_address2: address2,
            location_address3: address3,
            location_city_town: city_town,
            location_state_province: state_province,
            location_postal_code: postal_code,
            location_country: country,
            talks: camp.talks.into_iter().map(Into::into).collect(),
        }
    }
}

impl CampModel {
    /// Build a new Camp record, including any nested talks.
    ///
    /// Talks whose speakers carry the same profile share one Speaker.
    pub fn into_camp(mut self) -> Result<Camp, DomainError> {
        let moniker = self
            .moniker
            .take()
            .ok_or_else(|| DomainError::missing_field("moniker"))?;
        let name = self
            .name
            .take()
            .ok_or_else(|| DomainError::missing_field("name"))?;
        let event_date = self
            .event_date
            .ok_or_else(|| DomainError::missing_field("eventDate"))?;

        let mut camp = Camp::new(moniker, name, event_date);
        let mut speakers = Vec::new();
        camp.talks = std::mem::take(&mut self.talks)
            .into_iter()
            .map(|talk| talk.into_talk(&mut speakers))
            .collect();
        self.apply_to(&mut camp)?;
        Ok(camp)
    }

    /// Overlay every field that was sent onto an existing record.
    ///
    /// The moniker and talks are never overlaid; identity stays with the
    /// destination. Nothing is written if a sent field is invalid.
    pub fn apply_to(self, camp: &mut Camp) -> Result<(), DomainError> {
        if self.length.is_some_and(|length| length < MIN_CAMP_LENGTH) {
            return Err(DomainError::Validation(format!(
                "length must be at least {} day",
                MIN_CAMP_LENGTH
            )));
        }

        if let Some(name) = self.name {
            camp.name = name;
        }
        if let Some(description) = self.description {
            camp.description = Some(description);
        }
        if let Some(event_date) = self.event_date {
            camp.event_date = event_date;
        }
        if let Some(length) = self.length {
            camp.length = length;
        }

        let location = &mut camp.location;
        overlay(&mut location.venue_name, self.venue);
        overlay(&mut location.address1, self.location_address1);
        overlay(&mut location.address2, self.location_address2);
        overlay(&mut location.address3, self.location_address3);
        overlay(&mut location.city_town, self.location_city_town);
        overlay(&mut location.state_province, self.location_state_province);
        overlay(&mut location.postal_code, self.location_postal_code);
        overlay(&mut location.country, self.location_country);
        Ok(())
    }
}

fn overlay(dest: &mut Option<String>, src: Option<String>) {
    if src.is_some() {
        *dest = src;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpeakerModel;
    use codecamp::{Speaker, Talk};

    fn atlanta() -> Camp {
        let mut camp = Camp::new(
            "ATL2018".to_string(),
            "Atlanta Code Camp".to_string(),
            NaiveDate::from_ymd_opt(2018, 10, 18).unwrap(),
        );
        camp.location = Location {
            venue_name: Some("Atlanta Convention Center".to_string()),
            address1: Some("123 Main Street".to_string()),
            city_town: Some("Atlanta".to_string()),
            state_province: Some("GA".to_string()),
            postal_code: Some("12345".to_string()),
            country: Some("USA".to_string()),
            ..Default::default()
        };
        camp
    }

    #[test]
    fn test_venue_derived_from_location() {
        let model = CampModel::from(atlanta());

        assert_eq!(model.venue.as_deref(), Some("Atlanta Convention Center"));
        assert_eq!(model.location_city_town.as_deref(), Some("Atlanta"));
        assert_eq!(model.moniker.as_deref(), Some("ATL2018"));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(CampModel::from(atlanta())).unwrap();

        assert_eq!(json["eventDate"], "2018-10-18");
        assert_eq!(json["venue"], "Atlanta Convention Center");
        assert_eq!(json["locationStateProvince"], "GA");
        assert!(json.get("id").is_none());
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_round_trip_rebuilds_location() {
        let original = atlanta();
        let rebuilt = CampModel::from(original.clone()).into_camp().unwrap();

        assert_eq!(rebuilt.moniker, original.moniker);
        assert_eq!(rebuilt.name, original.name);
        assert_eq!(rebuilt.event_date, original.event_date);
        assert_eq!(rebuilt.location, original.location);
    }

    #[test]
    fn test_into_camp_requires_moniker_name_and_date() {
        let model = CampModel {
            name: Some("Nameless".to_string()),
            event_date: NaiveDate::from_ymd_opt(2019, 1, 1),
            ..Default::default()
        };
        assert!(matches!(model.into_camp(), Err(DomainError::Validation(_))));

        let model = CampModel {
            moniker: Some("X".to_string()),
            event_date: NaiveDate::from_ymd_opt(2019, 1, 1),
            ..Default::default()
        };
        assert!(matches!(model.into_camp(), Err(DomainError::Validation(_))));

        let model = CampModel {
            moniker: Some("X".to_string()),
            name: Some("X".to_string()),
            ..Default::default()
        };
        assert!(matches!(model.into_camp(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_into_camp_maps_talks() {
        let model = CampModel {
            moniker: Some("SEA2019".to_string()),
            name: Some("Seattle Code Camp".to_string()),
            event_date: NaiveDate::from_ymd_opt(2019, 6, 1),
            talks: vec![TalkModel {
                title: "Intro to Rust".to_string(),
                abstract_text: "Ownership without tears.".to_string(),
                level: 100,
                speaker: None,
            }],
            ..Default::default()
        };

        let camp = model.into_camp().unwrap();
        assert_eq!(camp.length, 1);
        assert_eq!(camp.talks.len(), 1);
        assert_eq!(camp.talks[0].title, "Intro to Rust");
    }

    #[test]
    fn test_overlay_only_replaces_sent_fields() {
        let mut camp = atlanta();
        camp.description = Some("Original".to_string());

        CampModel {
            name: Some("Atlanta Code Camp 2018".to_string()),
            venue: Some("Georgia World Congress Center".to_string()),
            ..Default::default()
        }
        .apply_to(&mut camp)
        .unwrap();

        assert_eq!(camp.name, "Atlanta Code Camp 2018");
        assert_eq!(
            camp.location.venue_name.as_deref(),
            Some("Georgia World Congress Center")
        );
        assert_eq!(camp.description.as_deref(), Some("Original"));
        assert_eq!(camp.location.address1.as_deref(), Some("123 Main Street"));
        assert_eq!(camp.moniker, "ATL2018");
    }

    #[test]
    fn test_overlay_ignores_moniker_and_talks() {
        let mut camp = atlanta();
        camp.talks.push(Talk::new(
            "Keynote".to_string(),
            "Welcome".to_string(),
            100,
            Some(Speaker::new("Shawn".to_string(), "Wildermuth".to_string())),
        ));

        CampModel {
            moniker: Some("OTHER".to_string()),
            ..Default::default()
        }
        .apply_to(&mut camp)
        .unwrap();

        assert_eq!(camp.moniker, "ATL2018");
        assert_eq!(camp.talks.len(), 1);
    }

    #[test]
    fn test_length_below_one_day_rejected() {
        let mut camp = atlanta();

        for length in [0, -3] {
            let err = CampModel {
                name: Some("Renamed".to_string()),
                length: Some(length),
                ..Default::default()
            }
            .apply_to(&mut camp)
            .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert_eq!(camp.name, "Atlanta Code Camp");
        assert_eq!(camp.length, 1);

        let model = CampModel {
            length: Some(0),
            ..CampModel::from(atlanta())
        };
        assert!(matches!(model.into_camp(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_end_date_is_derived_and_not_read() {
        let mut camp = atlanta();
        camp.length = 3;
        let json = serde_json::to_value(CampModel::from(camp)).unwrap();
        assert_eq!(json["endDate"], "2018-10-20");

        let model: CampModel = serde_json::from_value(serde_json::json!({
            "endDate": "2018-10-30"
        }))
        .unwrap();
        assert!(model.end_date.is_none());
    }

    #[test]
    fn test_into_camp_shares_identical_speakers() {
        let shawn = SpeakerModel {
            first_name: "Shawn".to_string(),
            last_name: "Wildermuth".to_string(),
            ..Default::default()
        };
        let resa = SpeakerModel {
            first_name: "Resa".to_string(),
            last_name: "Wildermuth".to_string(),
            ..Default::default()
        };
        let talk = |title: &str, speaker: &SpeakerModel| TalkModel {
            title: title.to_string(),
            abstract_text: String::new(),
            level: 100,
            speaker: Some(speaker.clone()),
        };

        let camp = CampModel {
            talks: vec![
                talk("Keynote", &shawn),
                talk("Workshop", &shawn),
                talk("Closing", &resa),
            ],
            ..CampModel::from(atlanta())
        }
        .into_camp()
        .unwrap();

        let ids: Vec<_> = camp
            .talks
            .iter()
            .map(|t| t.speaker.as_ref().unwrap().id)
            .collect();
        assert_eq!(ids[0], ids[1]);
        assert_ne!(ids[0], ids[2]);
    }
}
