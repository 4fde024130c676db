//! Account records exchanged with `/auth/*`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the assistant should talk to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    #[default]
    Supportive,
    Direct,
    Gentle,
    Motivational,
}

impl CommunicationStyle {
    pub const ALL: [CommunicationStyle; 4] = [
        CommunicationStyle::Supportive,
        CommunicationStyle::Direct,
        CommunicationStyle::Gentle,
        CommunicationStyle::Motivational,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommunicationStyle::Supportive => "Supportive",
            CommunicationStyle::Direct => "Direct",
            CommunicationStyle::Gentle => "Gentle",
            CommunicationStyle::Motivational => "Motivational",
        }
    }

    /// The style after this one, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Goals offered during onboarding.
pub const WELLNESS_GOALS: &[&str] = &[
    "Reduce stress",
    "Sleep better",
    "Manage anxiety",
    "Improve mood",
    "Build habits",
    "Practice mindfulness",
];

/// Concerns offered during onboarding.
pub const WELLNESS_CONCERNS: &[&str] = &[
    "Anxiety",
    "Depression",
    "Stress",
    "Loneliness",
    "Burnout",
    "Grief",
];

/// Answers collected during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WellnessProfile {
    pub goals: Vec<String>,
    pub concerns: Vec<String>,
    pub communication_style: CommunicationStyle,
}

/// Account-level preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub communication_style: CommunicationStyle,
    pub reminder_time: Option<String>,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub wellness_profile: Option<WellnessProfile>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// "First Last", falling back to the email when no name is set.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wellness_profile: Option<WellnessProfile>,
}

/// Body returned by login and registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_camel_case_json() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "email": "sam@example.com",
            "firstName": "Sam",
            "lastName": "Rivera",
            "preferences": {"communicationStyle": "gentle"}
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Sam Rivera");
        assert_eq!(
            user.preferences.communication_style,
            CommunicationStyle::Gentle
        );
        assert!(user.wellness_profile.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "email": "anon@example.com"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "anon@example.com");
    }

    #[test]
    fn test_communication_style_cycles() {
        let mut style = CommunicationStyle::Supportive;
        for _ in 0..CommunicationStyle::ALL.len() {
            style = style.next();
        }
        assert_eq!(style, CommunicationStyle::Supportive);
    }
}
