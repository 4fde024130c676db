//! Mood check-ins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Triggers offered on the check-in form.
pub const MOOD_TRIGGERS: &[&str] = &[
    "Work",
    "Sleep",
    "Relationships",
    "Health",
    "Finances",
    "Family",
    "Exercise",
    "Social media",
    "Weather",
];

/// Emotion labels offered on the check-in form.
pub const EMOTIONS: &[&str] = &[
    "Happy", "Calm", "Grateful", "Hopeful", "Tired", "Anxious", "Sad", "Angry",
];

/// A wellness level on the 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ValidationError::MoodOutOfRange(level))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very low",
            2 => "Low",
            3 => "Okay",
            4 => "Good",
            _ => "Great",
        }
    }

    /// Every level, lowest first.
    pub fn all() -> impl Iterator<Item = MoodLevel> {
        (Self::MIN..=Self::MAX).map(MoodLevel)
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MoodLevel::new(value)
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

/// A logged check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub level: MoodLevel,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Check-in payload; id and timestamp are assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMoodEntry {
    pub level: MoodLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub triggers: Vec<String>,
}

/// Window of check-ins requested from the history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl HistoryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryPeriod::Week => "week",
            HistoryPeriod::Month => "month",
            HistoryPeriod::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    #[default]
    Stable,
    Declining,
}

/// Server-derived summary of recent check-ins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoodInsights {
    pub average_level: f64,
    pub trend: MoodTrend,
    pub common_triggers: Vec<String>,
    pub streak_days: u32,
    pub suggestions: Vec<String>,
}
