//! Speaker - Person giving Talks
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Speaker - May be shared by many Talks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Speaker {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl Speaker {
    /// Create a new Speaker with generated ID and no profile links
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            ..Default::default()
        }
    }
}
