//! User-facing settings edited on the profile screen.
//!
//! Persisted as one JSON blob under [`SETTINGS_KEY`], written only when the
//! user saves. Missing fields fall back to their defaults so older blobs
//! keep loading.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::models::CommunicationStyle;
use crate::storage::{LocalStore, SETTINGS_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub daily_reminders: bool,
    pub mood_check_ins: bool,
    pub therapy_reminders: bool,
    pub achievement_alerts: bool,
    pub crisis_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            mood_check_ins: true,
            therapy_reminders: true,
            achievement_alerts: true,
            crisis_alerts: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacySettings {
    pub data_sharing: bool,
    pub analytics: bool,
    pub personalized_insights: bool,
    pub community_participation: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            data_sharing: false,
            analytics: true,
            personalized_insights: true,
            community_participation: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Default,
    Ocean,
    Forest,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub dark_mode: bool,
    pub font_size: FontSize,
    pub color_theme: ColorTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionLength {
    Short,
    #[default]
    Medium,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSettings {
    pub communication_style: CommunicationStyle,
    pub session_length: SessionLength,
    pub content_suggestions: bool,
    pub crisis_detection: bool,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            communication_style: CommunicationStyle::default(),
            session_length: SessionLength::default(),
            content_suggestions: true,
            crisis_detection: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataRetention {
    #[serde(rename = "6months")]
    SixMonths,
    #[default]
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "2years")]
    TwoYears,
    #[serde(rename = "forever")]
    Forever,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub data_retention: DataRetention,
    /// Set when the user has asked for their account to be removed.
    pub account_deletion: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            data_retention: DataRetention::default(),
            account_deletion: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub appearance: AppearanceSettings,
    pub ai: AiSettings,
    pub account: AccountSettings,
}

impl UserSettings {
    /// Load saved settings, or defaults when nothing was saved yet.
    pub fn load(store: &LocalStore) -> Result<Self, StorageError> {
        Ok(store.get(SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, store: &LocalStore) -> Result<(), StorageError> {
        store.set(SETTINGS_KEY, self)?;
        tracing::debug!("Saved settings to {}", store.path_for(SETTINGS_KEY).display());
        Ok(())
    }

    /// Display value of one field.
    pub fn value_label(&self, field: SettingField) -> String {
        let on_off = |b: bool| if b { "On" } else { "Off" }.to_string();
        match field {
            SettingField::DailyReminders => on_off(self.notifications.daily_reminders),
            SettingField::MoodCheckIns => on_off(self.notifications.mood_check_ins),
            SettingField::TherapyReminders => on_off(self.notifications.therapy_reminders),
            SettingField::AchievementAlerts => on_off(self.notifications.achievement_alerts),
            SettingField::CrisisAlerts => on_off(self.notifications.crisis_alerts),
            SettingField::DataSharing => on_off(self.privacy.data_sharing),
            SettingField::Analytics => on_off(self.privacy.analytics),
            SettingField::PersonalizedInsights => on_off(self.privacy.personalized_insights),
            SettingField::CommunityParticipation => on_off(self.privacy.community_participation),
            SettingField::DarkMode => on_off(self.appearance.dark_mode),
            SettingField::FontSize => format!("{:?}", self.appearance.font_size),
            SettingField::ColorTheme => format!("{:?}", self.appearance.color_theme),
            SettingField::CommunicationStyle => {
                self.ai.communication_style.label().to_string()
            }
            SettingField::SessionLength => match self.ai.session_length {
                SessionLength::Short => "Short (5-10 min)".to_string(),
                SessionLength::Medium => "Medium (10-20 min)".to_string(),
                SessionLength::Long => "Long (20-40 min)".to_string(),
            },
            SettingField::ContentSuggestions => on_off(self.ai.content_suggestions),
            SettingField::CrisisDetection => on_off(self.ai.crisis_detection),
            SettingField::EmailNotifications => on_off(self.account.email_notifications),
            SettingField::PushNotifications => on_off(self.account.push_notifications),
            SettingField::DataRetention => match self.account.data_retention {
                DataRetention::SixMonths => "6 months".to_string(),
                DataRetention::OneYear => "1 year".to_string(),
                DataRetention::TwoYears => "2 years".to_string(),
                DataRetention::Forever => "Forever".to_string(),
            },
            SettingField::AccountDeletion => {
                if self.account.account_deletion { "Requested" } else { "No" }.to_string()
            }
        }
    }

    /// Flip a switch or advance a choice to its next value.
    pub fn cycle(&mut self, field: SettingField) {
        fn flip(b: &mut bool) {
            *b = !*b;
        }
        match field {
            SettingField::DailyReminders => flip(&mut self.notifications.daily_reminders),
            SettingField::MoodCheckIns => flip(&mut self.notifications.mood_check_ins),
            SettingField::TherapyReminders => flip(&mut self.notifications.therapy_reminders),
            SettingField::AchievementAlerts => flip(&mut self.notifications.achievement_alerts),
            SettingField::CrisisAlerts => flip(&mut self.notifications.crisis_alerts),
            SettingField::DataSharing => flip(&mut self.privacy.data_sharing),
            SettingField::Analytics => flip(&mut self.privacy.analytics),
            SettingField::PersonalizedInsights => flip(&mut self.privacy.personalized_insights),
            SettingField::CommunityParticipation => {
                flip(&mut self.privacy.community_participation)
            }
            SettingField::DarkMode => flip(&mut self.appearance.dark_mode),
            SettingField::FontSize => {
                self.appearance.font_size = match self.appearance.font_size {
                    FontSize::Small => FontSize::Medium,
                    FontSize::Medium => FontSize::Large,
                    FontSize::Large => FontSize::Small,
                }
            }
            SettingField::ColorTheme => {
                self.appearance.color_theme = match self.appearance.color_theme {
                    ColorTheme::Default => ColorTheme::Ocean,
                    ColorTheme::Ocean => ColorTheme::Forest,
                    ColorTheme::Forest => ColorTheme::Default,
                }
            }
            SettingField::CommunicationStyle => {
                self.ai.communication_style = self.ai.communication_style.next()
            }
            SettingField::SessionLength => {
                self.ai.session_length = match self.ai.session_length {
                    SessionLength::Short => SessionLength::Medium,
                    SessionLength::Medium => SessionLength::Long,
                    SessionLength::Long => SessionLength::Short,
                }
            }
            SettingField::ContentSuggestions => flip(&mut self.ai.content_suggestions),
            SettingField::CrisisDetection => flip(&mut self.ai.crisis_detection),
            SettingField::EmailNotifications => flip(&mut self.account.email_notifications),
            SettingField::PushNotifications => flip(&mut self.account.push_notifications),
            SettingField::DataRetention => {
                self.account.data_retention = match self.account.data_retention {
                    DataRetention::SixMonths => DataRetention::OneYear,
                    DataRetention::OneYear => DataRetention::TwoYears,
                    DataRetention::TwoYears => DataRetention::Forever,
                    DataRetention::Forever => DataRetention::SixMonths,
                }
            }
            SettingField::AccountDeletion => flip(&mut self.account.account_deletion),
        }
    }
}

/// One editable row of the settings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    DailyReminders,
    MoodCheckIns,
    TherapyReminders,
    AchievementAlerts,
    CrisisAlerts,
    DataSharing,
    Analytics,
    PersonalizedInsights,
    CommunityParticipation,
    DarkMode,
    FontSize,
    ColorTheme,
    CommunicationStyle,
    SessionLength,
    ContentSuggestions,
    CrisisDetection,
    EmailNotifications,
    PushNotifications,
    DataRetention,
    AccountDeletion,
}

impl SettingField {
    pub const ALL: [SettingField; 20] = [
        SettingField::DailyReminders,
        SettingField::MoodCheckIns,
        SettingField::TherapyReminders,
        SettingField::AchievementAlerts,
        SettingField::CrisisAlerts,
        SettingField::DataSharing,
        SettingField::Analytics,
        SettingField::PersonalizedInsights,
        SettingField::CommunityParticipation,
        SettingField::DarkMode,
        SettingField::FontSize,
        SettingField::ColorTheme,
        SettingField::CommunicationStyle,
        SettingField::SessionLength,
        SettingField::ContentSuggestions,
        SettingField::CrisisDetection,
        SettingField::EmailNotifications,
        SettingField::PushNotifications,
        SettingField::DataRetention,
        SettingField::AccountDeletion,
    ];

    pub fn section(&self) -> &'static str {
        use SettingField::*;
        match self {
            DailyReminders | MoodCheckIns | TherapyReminders | AchievementAlerts
            | CrisisAlerts => "Notifications",
            DataSharing | Analytics | PersonalizedInsights | CommunityParticipation => {
                "Privacy & data"
            }
            DarkMode | FontSize | ColorTheme => "Appearance",
            CommunicationStyle | SessionLength | ContentSuggestions | CrisisDetection => {
                "AI companion"
            }
            EmailNotifications | PushNotifications | DataRetention | AccountDeletion => {
                "Account"
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingField::DailyReminders => "Daily reminders",
            SettingField::MoodCheckIns => "Mood check-ins",
            SettingField::TherapyReminders => "Therapy reminders",
            SettingField::AchievementAlerts => "Achievement alerts",
            SettingField::CrisisAlerts => "Crisis alerts",
            SettingField::DataSharing => "Share anonymised data",
            SettingField::Analytics => "Usage analytics",
            SettingField::PersonalizedInsights => "Personalized insights",
            SettingField::CommunityParticipation => "Community participation",
            SettingField::DarkMode => "Dark mode",
            SettingField::FontSize => "Font size",
            SettingField::ColorTheme => "Color theme",
            SettingField::CommunicationStyle => "Communication style",
            SettingField::SessionLength => "Session length",
            SettingField::ContentSuggestions => "Content suggestions",
            SettingField::CrisisDetection => "Crisis detection",
            SettingField::EmailNotifications => "Email notifications",
            SettingField::PushNotifications => "Push notifications",
            SettingField::DataRetention => "Data retention",
            SettingField::AccountDeletion => "Request account deletion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_when_unsaved() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path());
        assert_eq!(UserSettings::load(&store).unwrap(), UserSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path());
        let mut settings = UserSettings::default();
        settings.cycle(SettingField::DarkMode);
        settings.cycle(SettingField::DataRetention);
        settings.cycle(SettingField::AccountDeletion);
        settings.save(&store).unwrap();

        let raw: serde_json::Value = store.get(SETTINGS_KEY).unwrap().unwrap();
        assert_eq!(raw["account"]["accountDeletion"], true);
        assert_eq!(raw["account"]["dataRetention"], "2years");

        let loaded = UserSettings::load(&store).unwrap();
        assert_eq!(loaded, settings);
        assert!(loaded.appearance.dark_mode);
        assert!(loaded.account.account_deletion);
        assert_eq!(loaded.account.data_retention, DataRetention::TwoYears);
    }

    #[test]
    fn test_account_defaults() {
        let account = AccountSettings::default();
        assert!(account.email_notifications);
        assert!(account.push_notifications);
        assert_eq!(account.data_retention, DataRetention::OneYear);
        assert!(!account.account_deletion);
    }

    #[test]
    fn test_partial_blob_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path());
        std::fs::write(
            store.path_for(SETTINGS_KEY),
            r#"{"privacy": {"dataSharing": true}}"#,
        )
        .unwrap();

        let loaded = UserSettings::load(&store).unwrap();
        assert!(loaded.privacy.data_sharing);
        assert!(loaded.privacy.analytics);
        assert_eq!(loaded.ai, AiSettings::default());
    }

    #[test]
    fn test_every_field_cycles_back() {
        for field in SettingField::ALL {
            let mut settings = UserSettings::default();
            let original = settings.value_label(field);
            settings.cycle(field);
            assert_ne!(settings.value_label(field), original, "{:?}", field);
        }
    }
}
