//! AppMessage enum for async communication within the application.

use crate::error::MindwellError;
use crate::models::{EmotionalAnalysis, TherapyType, User};

/// Messages posted to the event loop by spawned store actions and the
/// breathing tick task.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// One second of the breathing exercise elapsed
    BreathingTick,
    /// Startup session check finished; `None` when no token is stored
    SessionRestored(Option<User>),
    /// Login or registration succeeded
    SignedIn(User),
    /// A store refresh finished; the screen re-reads its snapshot
    Loaded,
    MoodLogged,
    /// The assistant answered a chat message
    ChatReplied { high_risk: bool },
    /// Emotional read of the chat draft
    EmotionAnalysed(EmotionalAnalysis),
    /// A therapy session was opened on the server
    SessionStarted { id: String, session_type: TherapyType },
    SessionCompleted,
    /// The backend's breathing patterns arrived
    ExercisesLoaded,
    JournalSaved,
    GoalCreated,
    GoalUpdated { completed: bool },
    PreferencesSaved,
    InteractionTracked,
    ContactAdded,
    SupportTriggered { contacts_notified: u32 },
    AllRead { count: usize },
    NotificationSettingsSaved,
    PostCreated,
    PostLiked { likes: u32 },
    CommentAdded,
    /// A store action failed
    Failed {
        action: &'static str,
        message: String,
        code: &'static str,
        unauthorized: bool,
    },
}

impl AppMessage {
    pub fn failed(action: &'static str, error: &MindwellError) -> Self {
        AppMessage::Failed {
            action,
            message: error.user_message(),
            code: error.error_code(),
            unauthorized: matches!(error, MindwellError::Api(api) if api.is_unauthorized()),
        }
    }
}
