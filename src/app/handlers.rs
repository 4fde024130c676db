//! Message handling for the App.

use crate::breathing::TickOutcome;
use crate::models::{RiskLevel, TherapyType};
use crate::navigation::Screen;

use super::forms::{GoalForm, JournalForm, MoodForm};
use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::BreathingTick => self.on_breathing_tick(),
            AppMessage::SessionRestored(Some(user)) => {
                tracing::info!("Restored session for {}", user.email);
                if matches!(
                    self.navigator.current(),
                    Screen::Welcome | Screen::Onboarding | Screen::Auth
                ) {
                    self.navigate_to(Screen::Chat);
                }
            }
            AppMessage::SessionRestored(None) => {}
            AppMessage::SignedIn(user) => {
                self.toaster
                    .success(format!("Welcome, {}", user.display_name()));
                self.onboarded_profile = None;
                self.auth_form = Default::default();
                if self.navigator.current() == Screen::Auth {
                    self.navigate_to(Screen::Chat);
                }
            }
            AppMessage::Loaded => {}
            AppMessage::MoodLogged => {
                self.mood.form = MoodForm::new();
                self.toaster.success("Mood logged");
            }
            AppMessage::ChatReplied { high_risk } => {
                if high_risk {
                    self.toaster
                        .info("If you are in crisis, press Ctrl+G for support resources");
                }
            }
            AppMessage::EmotionAnalysed(analysis) => {
                let summary = match analysis.primary_emotion() {
                    Some(emotion) => format!(
                        "Sounds like {} (intensity {}/10)",
                        emotion, analysis.intensity
                    ),
                    None => "No strong emotion detected".to_string(),
                };
                self.toaster.info(summary);
                if analysis.risk_level == RiskLevel::High {
                    self.toaster
                        .info("If you are in crisis, press Ctrl+G for support resources");
                }
            }
            AppMessage::SessionStarted {
                id,
                session_type: TherapyType::Breathing,
            } => match &mut self.tools.session {
                Some(session) => session.id = Some(id),
                None => tracing::debug!("Session {} started after the run was abandoned", id),
            },
            AppMessage::SessionStarted { session_type, .. } => {
                self.toaster
                    .info(format!("{} session started", session_type.label()));
            }
            AppMessage::SessionCompleted => self.toaster.success("Session recorded"),
            AppMessage::ExercisesLoaded => {
                let exercises = self.breathing_exercises();
                self.tools.reselect(&exercises);
            }
            AppMessage::JournalSaved => {
                self.tools.journal = JournalForm::new();
                self.toaster.success("Journal entry saved");
            }
            AppMessage::GoalCreated => {
                self.tools.goal_form = None;
                self.toaster.success("Goal created");
            }
            AppMessage::GoalUpdated { completed } => {
                if completed {
                    self.toaster.success("Goal completed!");
                }
            }
            AppMessage::PreferencesSaved => self.toaster.success("Preferences saved"),
            AppMessage::InteractionTracked => self.toaster.success("Feedback recorded"),
            AppMessage::ContactAdded => {
                self.crisis.contact_form = None;
                self.toaster.success("Contact added");
            }
            AppMessage::SupportTriggered { contacts_notified } => {
                self.toaster.success(format!(
                    "Crisis support activated, {} contact{} notified",
                    contacts_notified,
                    if contacts_notified == 1 { "" } else { "s" }
                ));
            }
            AppMessage::AllRead { count } => {
                if count > 0 {
                    self.toaster.info(format!("Marked {} as read", count));
                }
            }
            AppMessage::NotificationSettingsSaved => {
                self.toaster.success("Notification settings saved")
            }
            AppMessage::PostCreated => {
                self.community.compose = None;
                self.community.selected = 0;
                self.toaster.success("Post shared");
            }
            AppMessage::PostLiked { .. } => {}
            AppMessage::CommentAdded => {
                self.community.comment = None;
            }
            AppMessage::Failed {
                action,
                message,
                unauthorized,
                ..
            } => {
                if unauthorized && action != "sign in" {
                    // The stored token is no longer accepted
                    if let Err(e) = self.stores.auth.logout() {
                        tracing::warn!("Could not clear rejected token: {}", e);
                    }
                    self.navigate_to(Screen::Auth);
                }
                self.toaster.error(message);
            }
        }
    }

    fn on_breathing_tick(&mut self) {
        if self.navigator.current() != Screen::Tools {
            return;
        }
        let outcome = self.tools.timer.tick();
        if outcome == TickOutcome::Idle {
            return;
        }
        if let Some(session) = &mut self.tools.session {
            session.elapsed_secs += 1;
        }
        if outcome == TickOutcome::Finished {
            self.toaster.success("Exercise complete");
            self.finish_breathing();
        }
    }

    /// Open an empty goal draft.
    pub fn open_goal_form(&mut self) {
        self.tools.goal_form = Some(GoalForm::default());
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mock_app;
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::breathing::PRESETS;
    use crate::models::User;
    use crate::traits::TokenStore;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(json!({
            "id": "u1",
            "email": "sam@example.com",
            "firstName": "Sam",
            "lastName": "Lee"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_signed_in_moves_auth_to_chat() {
        let (mut app, http, _tokens, _dir) = mock_app();
        http.set_default_response(MockResponse::json(json!([])));
        app.navigate_to(Screen::Auth);
        app.handle_message(AppMessage::SignedIn(user()));
        assert_eq!(app.navigator.current(), Screen::Chat);
    }

    #[tokio::test]
    async fn test_unauthorized_failure_signs_out() {
        let (mut app, http, tokens, _dir) = mock_app();
        http.set_default_response(MockResponse::json(json!([])));
        tokens.set_token("stale").unwrap();
        app.navigate_to(Screen::Mood);

        app.handle_message(AppMessage::Failed {
            action: "load mood history",
            message: "Please sign in again.".to_string(),
            code: "E_API_STATUS",
            unauthorized: true,
        });

        assert_eq!(app.navigator.current(), Screen::Auth);
        assert!(!tokens.has_token());
    }

    #[tokio::test]
    async fn test_ticks_ignored_off_screen() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        app.tools.timer.toggle();
        let before = app.tools.timer.remaining();
        app.handle_message(AppMessage::BreathingTick);
        assert_eq!(app.tools.timer.remaining(), before);
    }

    #[tokio::test]
    async fn test_ticks_count_session_time() {
        let (mut app, http, _tokens, _dir) = mock_app();
        http.set_default_response(MockResponse::json(json!([])));
        app.navigate_to(Screen::Tools);
        app.tools.timer.toggle();
        app.tools.session = Some(super::super::types::ActiveSession {
            id: None,
            elapsed_secs: 0,
            mood_before: None,
        });

        for _ in 0..3 {
            app.handle_message(AppMessage::BreathingTick);
        }

        assert_eq!(app.tools.session.as_ref().unwrap().elapsed_secs, 3);
        assert_eq!(app.tools.timer.remaining(), PRESETS[0].inhale - 3);
    }

    #[tokio::test]
    async fn test_breathing_start_binds_session_id() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        app.tools.session = Some(super::super::types::ActiveSession {
            id: None,
            elapsed_secs: 0,
            mood_before: None,
        });

        app.handle_message(AppMessage::SessionStarted {
            id: "s9".to_string(),
            session_type: TherapyType::Breathing,
        });
        app.handle_message(AppMessage::SessionStarted {
            id: "m1".to_string(),
            session_type: TherapyType::Mindfulness,
        });

        assert_eq!(app.tools.session.as_ref().unwrap().id.as_deref(), Some("s9"));
        assert!(app.toaster.latest().is_some());
    }

    #[tokio::test]
    async fn test_high_risk_analysis_points_to_crisis_help() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        let analysis = crate::models::EmotionalAnalysis {
            emotions: vec!["hopeless".to_string()],
            intensity: 9,
            risk_level: RiskLevel::High,
            ..Default::default()
        };

        app.handle_message(AppMessage::EmotionAnalysed(analysis));

        let latest = app.toaster.latest().unwrap();
        assert!(latest.message.contains("Ctrl+G"));
    }
}
