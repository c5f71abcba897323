//! Camp - Conference event record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Talk;

/// Camp - A conference event, uniquely keyed by its moniker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Camp {
    pub id: Uuid,
    /// Unique natural key, immutable once created
    pub moniker: String,
    pub name: String,
    pub description: Option<String>,
    /// First day of the event
    pub event_date: NaiveDate,
    /// Duration in days
    pub length: i32,
    pub location: Location,
    /// Only populated when talks are explicitly requested
    #[serde(default)]
    pub talks: Vec<Talk>,
}

/// Location - Venue and postal address embedded in a Camp
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Camp {
    /// Create a new one-day Camp with generated ID and no location details
    pub fn new(moniker: String, name: String, event_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            moniker,
            name,
            description: None,
            event_date,
            length: 1,
            location: Location::default(),
            talks: Vec::new(),
        }
    }

    /// Last day of the event (inclusive); a length below one day counts as one
    pub fn end_date(&self) -> NaiveDate {
        let extra_days = self.length.max(1) as u64 - 1;
        self.event_date
            .checked_add_days(Days::new(extra_days))
            .unwrap_or(NaiveDate::MAX)
    }
}
