//! Records exchanged with the backend.
//!
//! Bodies are camelCase JSON. Types named `New*` are request payloads: the
//! entity minus server-assigned fields (id, timestamps).

pub mod analytics;
pub mod chat;
pub mod community;
pub mod crisis;
pub mod goals;
pub mod mood;
pub mod notifications;
pub mod personalization;
pub mod therapy;
pub mod user;

pub use analytics::{sparkline, AnalyticsData, AnalyticsPeriod, ProgressReport};
pub use chat::{
    AnalyzeEmotionRequest, ChatMessage, EmotionalAnalysis, MessageType, RiskLevel, SendMessageRequest,
    Sentiment, LOCAL_USER_ID,
};
pub use community::{
    filter_posts, CategoryFilter, Comment, CommunityPost, NewComment, NewPost, PostCategory,
};
pub use crisis::{
    default_resources, CrisisContact, CrisisResource, CrisisSeverity, CrisisSupportRequest,
    NewCrisisContact, SupportReceipt,
};
pub use goals::{clamp_progress, GoalCategory, NewGoal, ProgressUpdate, WellnessGoal};
pub use mood::{
    HistoryPeriod, MoodEntry, MoodInsights, MoodLevel, MoodTrend, NewMoodEntry, EMOTIONS,
    MOOD_TRIGGERS,
};
pub use notifications::{Notification, NotificationKind, NotificationSetting, NotificationSettings};
pub use personalization::{
    PersonalizationPreferences, Recommendation, TrackInteraction, CONTENT_TYPES, MAX_EFFECTIVENESS,
};
pub use therapy::{
    session_effectiveness, BreathingPattern, CbtJournalEntry, CompleteSession, Difficulty,
    MindfulnessCategory, MindfulnessSession, NewJournalEntry, StartSession, TherapySession,
    TherapyType,
};
pub use user::{
    AuthResponse, CommunicationStyle, LoginRequest, RegisterRequest, User, UserPreferences,
    WellnessProfile, WELLNESS_CONCERNS, WELLNESS_GOALS,
};
