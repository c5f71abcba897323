//! Speaker wire model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use codecamp::Speaker;

/// Speaker as exposed by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeakerModel {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    #[serde(rename = "gitHub")]
    pub github: Option<String>,
}

impl From<Speaker> for SpeakerModel {
    fn from(speaker: Speaker) -> Self {
        Self {
            first_name: speaker.first_name,
            middle_name: speaker.middle_name,
            last_name: speaker.last_name,
            company: speaker.company,
            company_url: speaker.company_url,
            blog_url: speaker.blog_url,
            twitter: speaker.twitter,
            github: speaker.github,
        }
    }
}

impl SpeakerModel {
    /// Resolve to the speaker in `known` with the same profile, or register
    /// a new one
    pub fn into_shared(self, known: &mut Vec<Speaker>) -> Speaker {
        let speaker = Speaker::from(self);
        if let Some(existing) = known.iter().find(|k| {
            **k == Speaker {
                id: k.id,
                ..speaker.clone()
            }
        }) {
            return existing.clone();
        }

        known.push(speaker.clone());
        speaker
    }
}

impl From<SpeakerModel> for Speaker {
    fn from(model: SpeakerModel) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            company: model.company,
            company_url: model.company_url,
            blog_url: model.blog_url,
            twitter: model.twitter,
            github: model.github,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_uses_wire_name() {
        let model = SpeakerModel {
            first_name: "Shawn".to_string(),
            last_name: "Wildermuth".to_string(),
            github: Some("shawnwildermuth".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["gitHub"], "shawnwildermuth");
        assert_eq!(json["firstName"], "Shawn");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_reverse_mapping_assigns_fresh_id() {
        let model = SpeakerModel {
            first_name: "Resa".to_string(),
            last_name: "Wildermuth".to_string(),
            ..Default::default()
        };

        let a: Speaker = model.clone().into();
        let b: Speaker = model.into();
        assert_eq!(a.last_name, "Wildermuth");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_into_shared_matches_whole_profile() {
        let shawn = SpeakerModel {
            first_name: "Shawn".to_string(),
            last_name: "Wildermuth".to_string(),
            twitter: Some("shawnwildermuth".to_string()),
            ..Default::default()
        };
        let mut known = Vec::new();

        let first = shawn.clone().into_shared(&mut known);
        let again = shawn.clone().into_shared(&mut known);
        assert_eq!(first.id, again.id);

        let other = SpeakerModel {
            twitter: None,
            ..shawn
        }
        .into_shared(&mut known);
        assert_ne!(first.id, other.id);
        assert_eq!(known.len(), 2);
    }
}
