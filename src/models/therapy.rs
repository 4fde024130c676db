//! Guided therapy tools: sessions, breathing patterns, mindfulness sessions
//! and CBT journal entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MoodLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TherapyType {
    Breathing,
    Cbt,
    Journaling,
    Mindfulness,
    Sleep,
}

impl TherapyType {
    pub fn label(&self) -> &'static str {
        match self {
            TherapyType::Breathing => "Breathing",
            TherapyType::Cbt => "CBT",
            TherapyType::Journaling => "CBT Journal",
            TherapyType::Mindfulness => "Mindfulness",
            TherapyType::Sleep => "Sleep",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapySession {
    pub id: String,
    #[serde(rename = "type")]
    pub session_type: TherapyType,
    /// Minutes spent in the tool.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub mood_before: Option<MoodLevel>,
    #[serde(default)]
    pub mood_after: Option<MoodLevel>,
    /// 1..=10 self-rating of how much the session helped.
    #[serde(default)]
    pub effectiveness: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TherapySession {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StartSession {
    #[serde(rename = "type")]
    pub session_type: TherapyType,
}

/// Fields recorded when a session ends. Unset fields are left out of the
/// body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_before: Option<MoodLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_after: Option<MoodLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<u8>,
    /// Minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Highest session effectiveness rating.
pub const MAX_EFFECTIVENESS: u8 = 10;

/// Effectiveness derived from the mood shift across a session: 5 plus the
/// size of the shift, capped at 10.
pub fn session_effectiveness(before: MoodLevel, after: MoodLevel) -> u8 {
    (before.value().abs_diff(after.value()) + 5).min(MAX_EFFECTIVENESS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A breathing pattern served by the backend. Durations are seconds; the
/// rest phase is not part of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingPattern {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub inhale_duration: u32,
    #[serde(default)]
    pub hold_duration: u32,
    pub exhale_duration: u32,
    pub cycles: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MindfulnessCategory {
    Breathing,
    BodyScan,
    LovingKindness,
    Walking,
}

impl MindfulnessCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MindfulnessCategory::Breathing => "Breathing",
            MindfulnessCategory::BodyScan => "Body scan",
            MindfulnessCategory::LovingKindness => "Loving-kindness",
            MindfulnessCategory::Walking => "Walking",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindfulnessSession {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub guided: bool,
    pub category: MindfulnessCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CbtJournalEntry {
    pub id: String,
    pub situation: String,
    #[serde(default)]
    pub thoughts: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub behaviors: String,
    #[serde(default)]
    pub alternative_thoughts: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    pub situation: String,
    pub thoughts: String,
    pub emotions: Vec<String>,
    pub behaviors: String,
    pub alternative_thoughts: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_session_body() {
        let body = StartSession {
            session_type: TherapyType::Breathing,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"type": "breathing"})
        );
    }

    #[test]
    fn test_complete_session_body_skips_unset() {
        let body = CompleteSession {
            mood_before: Some(MoodLevel::new(2).unwrap()),
            mood_after: Some(MoodLevel::new(4).unwrap()),
            duration: Some(3),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"moodBefore": 2, "moodAfter": 4, "duration": 3})
        );
    }

    #[test]
    fn test_session_effectiveness() {
        let level = |v| MoodLevel::new(v).unwrap();
        assert_eq!(session_effectiveness(level(3), level(3)), 5);
        assert_eq!(session_effectiveness(level(2), level(5)), 8);
        assert_eq!(session_effectiveness(level(5), level(1)), 9);
    }

    #[test]
    fn test_session_defaults() {
        let session: TherapySession =
            serde_json::from_value(serde_json::json!({"id": "s1", "type": "cbt"})).unwrap();
        assert_eq!(session.session_type, TherapyType::Cbt);
        assert!(!session.is_completed());
        assert_eq!(session.duration, 0);
    }

    #[test]
    fn test_mindfulness_category_names() {
        let session: MindfulnessSession = serde_json::from_value(serde_json::json!({
            "id": "ms1", "name": "Evening scan", "duration": 10,
            "guided": true, "category": "body-scan"
        }))
        .unwrap();
        assert_eq!(session.category, MindfulnessCategory::BodyScan);
        assert!(session.audio_url.is_none());
    }
}
