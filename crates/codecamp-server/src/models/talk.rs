//! Talk wire model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use codecamp::{Speaker, Talk};

use super::SpeakerModel;

/// Talk as exposed by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TalkModel {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub level: i32,
    pub speaker: Option<SpeakerModel>,
}

impl From<Talk> for TalkModel {
    fn from(talk: Talk) -> Self {
        Self {
            title: talk.title,
            abstract_text: talk.abstract_text,
            level: talk.level,
            speaker: talk.speaker.map(Into::into),
        }
    }
}

impl TalkModel {
    /// Build a new Talk, resolving its speaker against those already seen
    pub fn into_talk(self, speakers: &mut Vec<Speaker>) -> Talk {
        Talk::new(
            self.title,
            self.abstract_text,
            self.level,
            self.speaker.map(|speaker| speaker.into_shared(speakers)),
        )
    }
}
