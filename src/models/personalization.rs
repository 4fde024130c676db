//! Personalization preferences and recommendations.

use serde::{Deserialize, Serialize};

use super::CommunicationStyle;

/// Content types the user can opt into.
pub const CONTENT_TYPES: &[&str] = &[
    "Articles",
    "Guided meditations",
    "Breathing exercises",
    "Journaling prompts",
    "Videos",
    "Podcasts",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalizationPreferences {
    pub content_types: Vec<String>,
    pub communication_style: CommunicationStyle,
    pub topics: Vec<String>,
    pub session_length_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Share of users this helped, 0.0..=1.0.
    #[serde(default)]
    pub effectiveness: Option<f64>,
}

impl Recommendation {
    pub fn effectiveness_percent(&self) -> Option<u32> {
        self.effectiveness
            .map(|e| (e.clamp(0.0, 1.0) * 100.0).round() as u32)
    }
}

/// Highest rating accepted by `track-interaction`.
pub const MAX_EFFECTIVENESS: u8 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct TrackInteraction {
    pub interaction: String,
    pub effectiveness: u8,
}
