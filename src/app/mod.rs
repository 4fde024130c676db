//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages posted by spawned store actions
//! - [`forms`] - Form drafts validated before any request
//! - [`types`] - Per-screen UI state
//!
//! The App owns the [`Navigator`] and one handle to every domain store. Key
//! presses mutate screen state or spawn a store action on the runtime; the
//! action's outcome comes back as an [`AppMessage`] through `message_tx`
//! and is applied in [`App::handle_message`].

mod actions;
pub mod forms;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod state_methods;
pub mod types;

pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::breathing::TickDriver;
use crate::models::{AnalyticsPeriod, WellnessProfile};
use crate::navigation::Navigator;
use crate::settings::UserSettings;
use crate::storage::LocalStore;
use crate::stores::Stores;
use crate::toast::Toaster;

use forms::{AuthForm, OnboardingForm};
use types::{
    ChatView, CommunityView, CrisisView, MoodView, NotificationsView, PersonalizationView,
    ProfileView, ToolsView,
};

/// Main application state
pub struct App {
    /// Current screen; the only cross-screen state
    pub navigator: Navigator,
    /// Domain stores
    pub stores: Stores,
    /// On-disk key-value store for the settings blob
    pub local: LocalStore,
    /// User settings, written only on explicit save
    pub settings: UserSettings,
    /// Transient messages
    pub toaster: Toaster,
    pub auth_form: AuthForm,
    pub onboarding: OnboardingForm,
    /// Questionnaire answers waiting for registration
    pub onboarded_profile: Option<WellnessProfile>,
    pub chat: ChatView,
    pub mood: MoodView,
    pub tools: ToolsView,
    pub profile: ProfileView,
    pub analytics_period: AnalyticsPeriod,
    pub community: CommunityView,
    pub notifications: NotificationsView,
    pub crisis: CrisisView,
    pub personalization: PersonalizationView,
    /// Drives the breathing timer while it runs
    pub breathing_driver: TickDriver,
    /// Frame counter for animations
    pub tick_count: u64,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create a new App over `api`, with settings read from `local`.
    ///
    /// Unreadable settings fall back to defaults.
    pub fn new(api: ApiClient, local: LocalStore) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let settings = match UserSettings::load(&local) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Could not read settings, using defaults: {}", e);
                UserSettings::default()
            }
        };

        Self {
            navigator: Navigator::new(),
            stores: Stores::new(api),
            local,
            settings,
            toaster: Toaster::new(),
            auth_form: AuthForm::default(),
            onboarding: OnboardingForm::new(),
            onboarded_profile: None,
            chat: ChatView::default(),
            mood: MoodView::default(),
            tools: ToolsView::default(),
            profile: ProfileView::default(),
            analytics_period: AnalyticsPeriod::default(),
            community: CommunityView::default(),
            notifications: NotificationsView::default(),
            crisis: CrisisView::default(),
            personalization: PersonalizationView::default(),
            breathing_driver: TickDriver::new(),
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.navigator.current())
            .field("tick_count", &self.tick_count)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}
