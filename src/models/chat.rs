//! Conversation with the AI companion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender id used for messages shown before the server has stored them.
pub const LOCAL_USER_ID: &str = "current-user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    User,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Emotional read of a text, produced by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmotionalAnalysis {
    pub sentiment: Sentiment,
    pub emotions: Vec<String>,
    /// 1..=10
    pub intensity: u8,
    pub risk_level: RiskLevel,
    pub suggested_interventions: Vec<String>,
}

impl EmotionalAnalysis {
    /// Strongest emotion, when the server named any.
    pub fn primary_emotion(&self) -> Option<&str> {
        self.emotions.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub emotional_analysis: Option<EmotionalAnalysis>,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
}

impl ChatMessage {
    /// The user's own message as shown while the reply is pending. The id
    /// is the send time in milliseconds.
    pub fn local_user(content: &str, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis().to_string(),
            user_id: Some(LOCAL_USER_ID.to_string()),
            content: content.to_string(),
            message_type: MessageType::User,
            timestamp: at,
            emotional_analysis: None,
            suggested_actions: Vec::new(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.message_type == MessageType::User
    }

    /// Whether the server flagged this message as high risk.
    pub fn is_high_risk(&self) -> bool {
        self.emotional_analysis
            .as_ref()
            .is_some_and(|a| a.risk_level == RiskLevel::High)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeEmotionRequest {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_deserialization() {
        let reply: ChatMessage = serde_json::from_value(serde_json::json!({
            "id": "m2", "userId": "u1", "content": "That sounds hard.", "type": "ai",
            "timestamp": "2026-10-01T22:00:02Z",
            "emotionalAnalysis": {
                "sentiment": "negative",
                "emotions": ["anxious", "tired"],
                "intensity": 7,
                "riskLevel": "high",
                "suggestedInterventions": ["breathing"]
            },
            "suggestedActions": ["Try a breathing exercise"]
        }))
        .unwrap();

        assert!(!reply.is_from_user());
        assert!(reply.is_high_risk());
        let analysis = reply.emotional_analysis.unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert_eq!(analysis.primary_emotion(), Some("anxious"));
        assert_eq!(reply.suggested_actions.len(), 1);
    }

    #[test]
    fn test_local_user_message() {
        let at = DateTime::parse_from_rfc3339("2026-10-01T22:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let message = ChatMessage::local_user("I can't sleep", at);

        assert_eq!(message.id, at.timestamp_millis().to_string());
        assert_eq!(message.user_id.as_deref(), Some(LOCAL_USER_ID));
        assert!(message.is_from_user());
        assert!(!message.is_high_risk());
    }
}
