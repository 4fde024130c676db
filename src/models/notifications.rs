//! In-app notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Insight,
    Community,
    Goal,
    #[default]
    #[serde(other)]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default, alias = "message")]
    pub body: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Which reminders the backend may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub daily_check_in: bool,
    pub mood_reminder: bool,
    pub therapy_session: bool,
    pub goal_reminder: bool,
    pub crisis_support: bool,
    pub community_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            daily_check_in: true,
            mood_reminder: true,
            therapy_session: true,
            goal_reminder: true,
            crisis_support: true,
            community_updates: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSetting {
    DailyCheckIn,
    MoodReminder,
    TherapySession,
    GoalReminder,
    CrisisSupport,
    CommunityUpdates,
}

impl NotificationSetting {
    pub const ALL: [NotificationSetting; 6] = [
        NotificationSetting::DailyCheckIn,
        NotificationSetting::MoodReminder,
        NotificationSetting::TherapySession,
        NotificationSetting::GoalReminder,
        NotificationSetting::CrisisSupport,
        NotificationSetting::CommunityUpdates,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationSetting::DailyCheckIn => "Daily check-in",
            NotificationSetting::MoodReminder => "Mood reminder",
            NotificationSetting::TherapySession => "Therapy session",
            NotificationSetting::GoalReminder => "Goal reminder",
            NotificationSetting::CrisisSupport => "Crisis support",
            NotificationSetting::CommunityUpdates => "Community updates",
        }
    }
}

impl NotificationSettings {
    fn slot(&mut self, setting: NotificationSetting) -> &mut bool {
        match setting {
            NotificationSetting::DailyCheckIn => &mut self.daily_check_in,
            NotificationSetting::MoodReminder => &mut self.mood_reminder,
            NotificationSetting::TherapySession => &mut self.therapy_session,
            NotificationSetting::GoalReminder => &mut self.goal_reminder,
            NotificationSetting::CrisisSupport => &mut self.crisis_support,
            NotificationSetting::CommunityUpdates => &mut self.community_updates,
        }
    }

    pub fn get(&self, setting: NotificationSetting) -> bool {
        let mut copy = *self;
        *copy.slot(setting)
    }

    pub fn toggle(&mut self, setting: NotificationSetting) {
        let slot = self.slot(setting);
        *slot = !*slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_falls_back_to_system() {
        let n: Notification = serde_json::from_value(serde_json::json!({
            "id": "n1", "type": "promo", "title": "Hi", "message": "Welcome back"
        }))
        .unwrap();
        assert_eq!(n.kind, NotificationKind::System);
        assert_eq!(n.body, "Welcome back");
        assert!(!n.read);
    }

    #[test]
    fn test_settings_defaults_and_toggle() {
        let mut settings = NotificationSettings::default();
        assert!(settings.daily_check_in);
        assert!(!settings.community_updates);

        settings.toggle(NotificationSetting::CommunityUpdates);
        settings.toggle(NotificationSetting::MoodReminder);
        assert!(settings.get(NotificationSetting::CommunityUpdates));
        assert_eq!(
            serde_json::to_value(settings).unwrap(),
            serde_json::json!({
                "dailyCheckIn": true, "moodReminder": false, "therapySession": true,
                "goalReminder": true, "crisisSupport": true, "communityUpdates": true
            })
        );
    }
}
