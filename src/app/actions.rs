//! Action methods for the App.
//!
//! Each action validates its input synchronously, then spawns the store call
//! on the runtime. The outcome is posted back as an [`AppMessage`]; nothing
//! here waits on the network.

use std::future::Future;
use std::time::Duration;

use crate::error::{MindwellError, ValidationError};
use crate::breathing::exercises_or_presets;
use crate::models::{
    session_effectiveness, CompleteSession, CrisisSeverity, NotificationSetting,
    PersonalizationPreferences, TherapyType,
};
use crate::validation::{self, MAX_CHAT_LEN};

use super::forms::AuthMode;
use super::types::{ActiveSession, CrisisTab};
use super::{App, AppMessage};

/// Goal progress step for `+` / `-`.
pub const PROGRESS_STEP: i32 = 10;

impl App {
    /// Run `fut` on the runtime and post `on_ok(value)` or a failure message.
    pub(crate) fn spawn_action<T, E, F, M>(&self, action: &'static str, fut: F, on_ok: M)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Into<MindwellError> + Send + 'static,
        M: FnOnce(T) -> AppMessage + Send + 'static,
    {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match fut.await {
                Ok(value) => on_ok(value),
                Err(e) => {
                    let err: MindwellError = e.into();
                    tracing::warn!("{} failed [{}]: {}", action, err.error_code(), err);
                    AppMessage::failed(action, &err)
                }
            };
            let _ = tx.send(msg);
        });
    }

    /// Report input rejected before any request.
    pub(crate) fn reject(&mut self, err: ValidationError) {
        tracing::debug!("Rejected input: {}", err);
        self.toaster.error(err.to_string());
        self.mark_dirty();
    }

    /// Check a stored token against `/auth/me` at startup.
    pub fn restore_session(&self) {
        let auth = self.stores.auth.clone();
        self.spawn_action(
            "restore session",
            async move { auth.fetch_current_user().await },
            AppMessage::SessionRestored,
        );
    }

    pub fn submit_auth(&mut self) {
        let auth = self.stores.auth.clone();
        match self.auth_form.mode {
            AuthMode::Login => {
                let request = match self.auth_form.to_login() {
                    Ok(request) => request,
                    Err(e) => return self.reject(e),
                };
                self.spawn_action(
                    "sign in",
                    async move { auth.login(&request.email, &request.password).await },
                    AppMessage::SignedIn,
                );
            }
            AuthMode::Register => {
                let request = match self.auth_form.to_register(self.onboarded_profile.clone()) {
                    Ok(request) => request,
                    Err(e) => return self.reject(e),
                };
                self.spawn_action(
                    "register",
                    async move { auth.register(&request).await },
                    AppMessage::SignedIn,
                );
            }
        }
        self.auth_form.clear_secret();
    }

    /// Local sign-out. No request is made.
    pub fn sign_out(&mut self) {
        if let Err(e) = self.stores.auth.logout() {
            tracing::warn!("Sign-out could not remove the token: {}", e);
            self.toaster.error(e.user_message());
        }
        self.stores.chat.clear();
        self.navigate_to(crate::navigation::Screen::Auth);
    }

    pub fn send_chat(&mut self) {
        let content = match validation::require_bounded(
            "Message",
            self.chat.input.get_content(),
            MAX_CHAT_LEN,
        ) {
            Ok(content) => content,
            Err(e) => return self.reject(e),
        };
        self.chat.input.clear();
        self.chat.scroll = 0;
        let chat = self.stores.chat.clone();
        self.spawn_action(
            "send message",
            async move { chat.send_message(&content).await },
            |reply| AppMessage::ChatReplied {
                high_risk: reply.is_high_risk(),
            },
        );
    }

    /// Read the emotional tone of the draft without sending it.
    pub fn analyze_chat_draft(&mut self) {
        let text = match validation::require_bounded(
            "Message",
            self.chat.input.get_content(),
            MAX_CHAT_LEN,
        ) {
            Ok(text) => text,
            Err(e) => return self.reject(e),
        };
        let chat = self.stores.chat.clone();
        self.spawn_action(
            "analyze message",
            async move { chat.analyze_emotion(&text).await },
            AppMessage::EmotionAnalysed,
        );
    }

    pub fn submit_mood(&mut self) {
        let entry = match self.mood.form.to_entry() {
            Ok(entry) => entry,
            Err(e) => return self.reject(e),
        };
        let mood = self.stores.mood.clone();
        self.spawn_action(
            "log mood",
            async move { mood.log_mood(&entry).await },
            |_| AppMessage::MoodLogged,
        );
    }

    /// Start or pause the breathing exercise. The first start of a run opens
    /// a therapy session on the server.
    pub fn toggle_breathing(&mut self) {
        let was_stopped = self.tools.timer.is_stopped();
        self.tools.timer.toggle();
        if !self.tools.timer.is_active() {
            self.breathing_driver.stop();
            return;
        }
        self.breathing_driver.start(
            self.message_tx.clone(),
            AppMessage::BreathingTick,
            Duration::from_secs(1),
        );
        if was_stopped && self.tools.session.is_none() {
            // Fall back to the latest check-in when no mood was picked
            let mood_before = self
                .tools
                .mood_before
                .or_else(|| self.stores.mood.snapshot().history.first().map(|e| e.level));
            self.tools.session = Some(ActiveSession {
                id: None,
                elapsed_secs: 0,
                mood_before,
            });
            self.start_therapy_session(TherapyType::Breathing);
        }
    }

    fn start_therapy_session(&self, session_type: TherapyType) {
        let therapy = self.stores.therapy.clone();
        self.spawn_action(
            "start session",
            async move { therapy.start_session(session_type).await },
            |session| AppMessage::SessionStarted {
                id: session.id,
                session_type: session.session_type,
            },
        );
    }

    /// Reset the timer and cancel its tick task. The open session is
    /// abandoned.
    pub fn stop_breathing(&mut self) {
        self.breathing_driver.stop();
        self.tools.timer.stop();
        self.tools.session = None;
    }

    /// End the run and record the breathed time on the session.
    pub fn finish_breathing(&mut self) {
        self.breathing_driver.stop();
        self.tools.timer.stop();
        let Some(session) = self.tools.session.take() else {
            return;
        };
        let Some(id) = session.id else {
            tracing::debug!("Session start still pending, not recording completion");
            return;
        };
        let mood_after = self.tools.mood_after.take();
        self.tools.mood_before = None;
        let request = CompleteSession {
            mood_before: session.mood_before,
            mood_after,
            effectiveness: session
                .mood_before
                .zip(mood_after)
                .map(|(before, after)| session_effectiveness(before, after)),
            duration: Some(session.elapsed_secs.div_ceil(60)),
            notes: None,
        };
        let therapy = self.stores.therapy.clone();
        self.spawn_action(
            "complete session",
            async move { therapy.complete_session(&id, &request).await },
            |_| AppMessage::SessionCompleted,
        );
    }

    /// Breathing patterns to offer: the backend's, or the built-in presets.
    pub fn breathing_exercises(&self) -> Vec<crate::breathing::BreathingExercise> {
        exercises_or_presets(&self.stores.therapy.snapshot().breathing_exercises)
    }

    pub fn cycle_breathing_exercise(&mut self, forward: bool) {
        let exercises = self.breathing_exercises();
        self.tools.cycle_preset(&exercises, forward);
    }

    /// Open a mindfulness session for the selected entry.
    pub fn start_mindfulness(&mut self) {
        let state = self.stores.therapy.snapshot();
        if state.active.is_some() {
            self.toaster.info("Finish the current session first");
            return;
        }
        if state
            .mindfulness_sessions
            .get(self.tools.mindfulness_index)
            .is_none()
        {
            return;
        }
        self.start_therapy_session(TherapyType::Mindfulness);
    }

    /// Complete the open mindfulness session with the selected entry's
    /// length.
    pub fn finish_mindfulness(&mut self) {
        let state = self.stores.therapy.snapshot();
        let Some(active) = state
            .active
            .filter(|s| s.session_type == TherapyType::Mindfulness)
        else {
            return;
        };
        let duration = state
            .mindfulness_sessions
            .get(self.tools.mindfulness_index)
            .map(|m| m.duration);
        let request = CompleteSession {
            duration,
            ..CompleteSession::default()
        };
        let therapy = self.stores.therapy.clone();
        self.spawn_action(
            "complete session",
            async move { therapy.complete_session(&active.id, &request).await },
            |_| AppMessage::SessionCompleted,
        );
    }

    pub fn save_journal(&mut self) {
        let entry = match self.tools.journal.to_entry() {
            Ok(entry) => entry,
            Err(e) => return self.reject(e),
        };
        let therapy = self.stores.therapy.clone();
        self.spawn_action(
            "save journal entry",
            async move { therapy.save_journal_entry(&entry).await },
            |_| AppMessage::JournalSaved,
        );
    }

    pub fn submit_goal(&mut self) {
        let Some(form) = &self.tools.goal_form else {
            return;
        };
        let goal = match form.to_goal() {
            Ok(goal) => goal,
            Err(e) => return self.reject(e),
        };
        let goals = self.stores.goals.clone();
        self.spawn_action(
            "create goal",
            async move { goals.create_goal(&goal).await },
            |_| AppMessage::GoalCreated,
        );
    }

    /// Move the selected goal's progress by `delta` percentage points.
    pub fn adjust_goal(&mut self, delta: i32) {
        let state = self.stores.goals.snapshot();
        let Some(goal) = state.goals.get(self.tools.goal_index) else {
            return;
        };
        let id = goal.id.clone();
        let progress = i32::from(goal.progress) + delta;
        let goals = self.stores.goals.clone();
        self.spawn_action(
            "update goal",
            async move { goals.update_progress(&id, progress).await },
            |goal| AppMessage::GoalUpdated {
                completed: goal.completed,
            },
        );
    }

    pub fn complete_selected_goal(&mut self) {
        let state = self.stores.goals.snapshot();
        let Some(goal) = state.goals.get(self.tools.goal_index) else {
            return;
        };
        if goal.completed {
            return;
        }
        let id = goal.id.clone();
        let goals = self.stores.goals.clone();
        self.spawn_action(
            "complete goal",
            async move { goals.complete_goal(&id).await },
            |goal| AppMessage::GoalUpdated {
                completed: goal.completed,
            },
        );
    }

    /// Write the settings blob. This is the only place it is persisted.
    pub fn save_settings(&mut self) {
        match self.settings.save(&self.local) {
            Ok(()) => self.toaster.success("Settings saved"),
            Err(e) => {
                tracing::warn!("Saving settings failed [{}]: {}", e.error_code(), e);
                self.toaster.error(e.user_message());
            }
        }
        self.mark_dirty();
    }

    pub fn refresh_analytics(&self) {
        let analytics = self.stores.analytics.clone();
        let period = self.analytics_period;
        self.spawn_action(
            "load analytics",
            async move { analytics.fetch_analytics(period).await },
            |_| AppMessage::Loaded,
        );
    }

    /// Period data plus the progress report and insights.
    pub fn refresh_analytics_all(&self) {
        self.refresh_analytics();
        let analytics = self.stores.analytics.clone();
        self.spawn_action(
            "load progress report",
            async move { analytics.fetch_progress_report().await },
            |_| AppMessage::Loaded,
        );
        let analytics = self.stores.analytics.clone();
        self.spawn_action(
            "load insights",
            async move { analytics.fetch_insights().await },
            |_| AppMessage::Loaded,
        );
    }

    pub fn cycle_analytics_period(&mut self) {
        self.analytics_period = self.analytics_period.next();
        self.refresh_analytics();
    }

    pub fn refresh_community(&self, filter: crate::models::CategoryFilter) {
        let community = self.stores.community.clone();
        self.spawn_action(
            "load posts",
            async move { community.fetch_posts(filter).await },
            |_| AppMessage::Loaded,
        );
    }

    pub fn cycle_community_filter(&mut self) {
        let next = self.stores.community.snapshot().filter.next();
        self.community.selected = 0;
        self.refresh_community(next);
    }

    pub fn submit_post(&mut self) {
        let Some(form) = &self.community.compose else {
            return;
        };
        let post = match form.to_post() {
            Ok(post) => post,
            Err(e) => return self.reject(e),
        };
        let community = self.stores.community.clone();
        self.spawn_action(
            "share post",
            async move { community.create_post(&post).await },
            |_| AppMessage::PostCreated,
        );
    }

    fn selected_post_id(&self) -> Option<String> {
        let state = self.stores.community.snapshot();
        state
            .visible_posts()
            .get(self.community.selected)
            .map(|p| p.id.clone())
    }

    pub fn like_selected_post(&mut self) {
        let Some(id) = self.selected_post_id() else {
            return;
        };
        let community = self.stores.community.clone();
        self.spawn_action(
            "like post",
            async move { community.like_post(&id).await },
            |likes| AppMessage::PostLiked { likes },
        );
    }

    pub fn open_comment(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.community.comment = Some(super::forms::CommentForm::new(id));
        }
    }

    pub fn submit_comment(&mut self) {
        let Some(form) = &self.community.comment else {
            return;
        };
        let post_id = form.post_id.clone();
        let comment = match form.to_comment() {
            Ok(comment) => comment,
            Err(e) => return self.reject(e),
        };
        let community = self.stores.community.clone();
        self.spawn_action(
            "add comment",
            async move { community.add_comment(&post_id, &comment).await },
            |_| AppMessage::CommentAdded,
        );
    }

    pub fn mark_selected_notification_read(&mut self) {
        let state = self.stores.notifications.snapshot();
        let Some(notification) = state.notifications.get(self.notifications.selected) else {
            return;
        };
        if notification.read {
            return;
        }
        let id = notification.id.clone();
        let notifications = self.stores.notifications.clone();
        self.spawn_action(
            "mark notification read",
            async move { notifications.mark_read(&id).await },
            |_| AppMessage::Loaded,
        );
    }

    pub fn mark_all_notifications_read(&mut self) {
        let notifications = self.stores.notifications.clone();
        self.spawn_action(
            "mark all read",
            async move { notifications.mark_all_read().await },
            |count| AppMessage::AllRead { count },
        );
    }

    /// Flip one reminder setting and save the result.
    pub fn toggle_notification_setting(&mut self, setting: NotificationSetting) {
        let mut settings = self.stores.notifications.snapshot().settings;
        settings.toggle(setting);
        let notifications = self.stores.notifications.clone();
        self.spawn_action(
            "save notification settings",
            async move { notifications.update_settings(settings).await },
            |_| AppMessage::NotificationSettingsSaved,
        );
    }

    pub fn submit_contact(&mut self) {
        let Some(form) = &self.crisis.contact_form else {
            return;
        };
        let contact = match form.to_contact() {
            Ok(contact) => contact,
            Err(e) => return self.reject(e),
        };
        let crisis = self.stores.crisis.clone();
        self.spawn_action(
            "add contact",
            async move { crisis.add_contact(&contact).await },
            |_| AppMessage::ContactAdded,
        );
    }

    /// Ask for support at the severity being confirmed.
    pub fn trigger_crisis_support(&mut self) {
        let Some(severity) = self.crisis.support_confirm.take() else {
            return;
        };
        let crisis = self.stores.crisis.clone();
        self.spawn_action(
            "request crisis support",
            async move { crisis.trigger_support(severity).await },
            |receipt| AppMessage::SupportTriggered {
                contacts_notified: receipt.contacts_notified,
            },
        );
    }

    pub fn open_support_confirm(&mut self) {
        self.crisis.support_confirm = Some(CrisisSeverity::High);
    }

    /// Open the selected resource's website, or show its number.
    pub fn open_selected_resource(&mut self) {
        if self.crisis.tab != CrisisTab::Resources {
            return;
        }
        let resources = self.stores.crisis.snapshot().visible_resources();
        let Some(resource) = resources.get(self.crisis.selected) else {
            return;
        };
        if let Some(url) = &resource.website {
            if let Err(e) = open::that(url) {
                tracing::warn!("Could not open {}: {}", url, e);
                self.toaster.error(format!("Could not open {}", url));
            }
        } else if let Some(phone) = &resource.phone {
            self.toaster.info(format!("Call {}", phone));
        } else if let Some(text) = &resource.text_line {
            self.toaster.info(text.clone());
        }
        self.mark_dirty();
    }

    pub fn save_personalization(&mut self) {
        let base = self
            .stores
            .personalization
            .snapshot()
            .preferences
            .unwrap_or_else(PersonalizationPreferences::default);
        let prefs = self.personalization.preferences(base);
        let store = self.stores.personalization.clone();
        self.spawn_action(
            "save preferences",
            async move { store.update_preferences(&prefs).await },
            |_| AppMessage::PreferencesSaved,
        );
    }

    /// Rate how well the selected recommendation worked, 1..=5.
    pub fn rate_recommendation(&mut self, effectiveness: u8) {
        let state = self.stores.personalization.snapshot();
        let Some(rec) = state.recommendations.get(self.personalization.selected) else {
            return;
        };
        let interaction = rec.title.clone();
        let store = self.stores.personalization.clone();
        self.spawn_action(
            "record feedback",
            async move { store.track_interaction(&interaction, effectiveness).await },
            |_| AppMessage::InteractionTracked,
        );
    }
}
