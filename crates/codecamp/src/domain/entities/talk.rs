//! Talk - Scheduled session of a Camp
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Speaker;

/// Talk - Owned by exactly one Camp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Talk {
    pub id: Uuid,
    pub title: String,
    pub abstract_text: String,
    /// Audience level (100 = introductory, 400 = expert)
    pub level: i32,
    pub speaker: Option<Speaker>,
}

impl Talk {
    /// Create a new Talk with generated ID
    pub fn new(title: String, abstract_text: String, level: i32, speaker: Option<Speaker>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            abstract_text,
            level,
            speaker,
        }
    }
}
