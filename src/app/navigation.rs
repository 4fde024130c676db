//! Screen transitions for the App.

use crate::navigation::Screen;
use crate::stores::DEFAULT_HISTORY_PERIOD;

use super::types::ToolPanel;
use super::{App, AppMessage};

impl App {
    /// Move to `to` and refresh the data it shows.
    ///
    /// Requests started for the previous screen are left to finish; their
    /// results land in the stores regardless of which screen is visible.
    pub fn navigate_to(&mut self, to: Screen) {
        let from = self.navigator.navigate(to);
        if from == Screen::Tools && to != Screen::Tools {
            self.leave_tools();
        }
        self.mark_dirty();
        if from != to {
            self.on_enter(to);
        }
    }

    pub fn next_tab(&mut self) {
        if let Some(from) = self.navigator.next_tab() {
            let to = self.navigator.current();
            self.after_tab_switch(from, to);
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(from) = self.navigator.prev_tab() {
            let to = self.navigator.current();
            self.after_tab_switch(from, to);
        }
    }

    fn after_tab_switch(&mut self, from: Screen, to: Screen) {
        if from == Screen::Tools {
            self.leave_tools();
        }
        self.mark_dirty();
        self.on_enter(to);
    }

    /// No tick may reach the timer once the tools screen is gone.
    fn leave_tools(&mut self) {
        if self.breathing_driver.is_running() || self.tools.timer.is_active() {
            tracing::debug!("Leaving tools, cancelling breathing ticks");
        }
        self.stop_breathing();
        self.tools.panel = ToolPanel::Menu;
    }

    fn on_enter(&mut self, screen: Screen) {
        if screen == Screen::Personalization {
            if let Some(prefs) = self.stores.personalization.snapshot().preferences {
                self.personalization.load(&prefs);
            }
        }
        let stores = &self.stores;
        match screen {
            Screen::Welcome | Screen::Onboarding | Screen::Auth | Screen::Profile => {}
            Screen::Chat => {
                let chat = stores.chat.clone();
                self.spawn_action(
                    "load chat history",
                    async move { chat.fetch_history().await },
                    |_| AppMessage::Loaded,
                );
            }
            Screen::Mood => {
                let mood = stores.mood.clone();
                self.spawn_action(
                    "load mood history",
                    async move { mood.fetch_history(DEFAULT_HISTORY_PERIOD).await },
                    |_| AppMessage::Loaded,
                );
                let mood = stores.mood.clone();
                self.spawn_action(
                    "load insights",
                    async move { mood.fetch_insights().await },
                    |_| AppMessage::Loaded,
                );
            }
            Screen::Tools => {
                let goals = stores.goals.clone();
                self.spawn_action(
                    "load goals",
                    async move { goals.fetch_goals().await },
                    |_| AppMessage::Loaded,
                );
                let therapy = stores.therapy.clone();
                self.spawn_action(
                    "load breathing exercises",
                    async move { therapy.fetch_breathing_exercises().await },
                    |_| AppMessage::ExercisesLoaded,
                );
                let therapy = stores.therapy.clone();
                self.spawn_action(
                    "load mindfulness sessions",
                    async move { therapy.fetch_mindfulness_sessions().await },
                    |_| AppMessage::Loaded,
                );
                let therapy = stores.therapy.clone();
                self.spawn_action(
                    "load journal",
                    async move { therapy.fetch_journal_entries().await },
                    |_| AppMessage::Loaded,
                );
            }
            Screen::Analytics => self.refresh_analytics_all(),
            Screen::Community => {
                let filter = stores.community.snapshot().filter;
                self.refresh_community(filter);
            }
            Screen::Notifications => {
                let notifications = stores.notifications.clone();
                self.spawn_action(
                    "load notifications",
                    async move { notifications.fetch().await },
                    |_| AppMessage::Loaded,
                );
            }
            Screen::Crisis => {
                let crisis = stores.crisis.clone();
                self.spawn_action(
                    "load crisis resources",
                    async move { crisis.fetch_resources().await },
                    |_| AppMessage::Loaded,
                );
                let crisis = stores.crisis.clone();
                self.spawn_action(
                    "load contacts",
                    async move { crisis.fetch_contacts().await },
                    |_| AppMessage::Loaded,
                );
            }
            Screen::Personalization => {
                let store = stores.personalization.clone();
                self.spawn_action(
                    "load recommendations",
                    async move { store.fetch_recommendations().await },
                    |_| AppMessage::Loaded,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mock_app;
    use super::AppMessage;
    use crate::adapters::mock::MockResponse;
    use crate::navigation::Screen;
    use crate::stores::DEFAULT_HISTORY_PERIOD;
    use serde_json::json;

    #[tokio::test]
    async fn test_leaving_tools_cancels_breathing() {
        let (mut app, http, _tokens, _dir) = mock_app();
        http.set_default_response(MockResponse::json(json!([])));
        app.navigate_to(Screen::Tools);
        app.toggle_breathing();
        assert!(app.tools.timer.is_active());
        assert!(app.breathing_driver.is_running());

        app.navigate_to(Screen::Chat);

        assert!(!app.breathing_driver.is_running());
        assert!(app.tools.timer.is_stopped());
        assert!(app.tools.session.is_none());
    }

    #[tokio::test]
    async fn test_entering_a_screen_refreshes_it() {
        let (mut app, http, _tokens, _dir) = mock_app();
        http.set_default_response(MockResponse::json(json!([])));
        app.navigate_to(Screen::Notifications);
        tokio::task::yield_now().await;
        assert_eq!(http.requests_matching("/notifications").len(), 1);
    }

    #[tokio::test]
    async fn test_mood_screen_loads_default_period() {
        let (mut app, http, _tokens, _dir) = mock_app();
        http.set_default_response(MockResponse::json(json!([])));
        app.navigate_to(Screen::Mood);
        tokio::task::yield_now().await;
        let expected = format!("/mood/history?period={}", DEFAULT_HISTORY_PERIOD.as_str());
        assert_eq!(http.requests_matching(&expected).len(), 1);
    }

    #[tokio::test]
    async fn test_tab_cycle_skips_when_not_on_a_tab() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        app.next_tab();
        assert_eq!(app.navigator.current(), Screen::Welcome);
    }

    #[tokio::test]
    async fn test_tools_pick_up_backend_exercises() {
        let (mut app, http, _tokens, _dir) = mock_app();
        let mut rx = app.message_rx.take().unwrap();
        http.set_default_response(MockResponse::json(json!([])));
        http.set_response(
            &crate::stores::test_support::url("/therapy/breathing-exercises"),
            MockResponse::json(json!([{
                "id": "server-box", "name": "Server box", "inhaleDuration": 5,
                "holdDuration": 5, "exhaleDuration": 5, "cycles": 3
            }])),
        );

        app.navigate_to(Screen::Tools);
        loop {
            let msg = super::super::test_support::pump(&mut app, &mut rx).await;
            if msg == AppMessage::ExercisesLoaded {
                break;
            }
        }

        assert_eq!(app.tools.timer.exercise().id, "server-box");
        assert_eq!(app.tools.timer.exercise().rest, crate::breathing::SERVER_REST_SECONDS);
    }
}
