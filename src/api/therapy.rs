use super::{encode_component, ApiClient};
use crate::error::ApiResult;
use crate::models::{
    BreathingPattern, CbtJournalEntry, CompleteSession, MindfulnessSession, NewJournalEntry,
    StartSession, TherapySession, TherapyType,
};

impl ApiClient {
    /// `POST /therapy/start-session`
    pub async fn start_session(&self, session_type: TherapyType) -> ApiResult<TherapySession> {
        self.post_json("/therapy/start-session", &StartSession { session_type })
            .await
    }

    /// `POST /therapy/complete-session/{id}`
    pub async fn complete_session(
        &self,
        session_id: &str,
        request: &CompleteSession,
    ) -> ApiResult<TherapySession> {
        let path = format!(
            "/therapy/complete-session/{}",
            encode_component(session_id)
        );
        self.post_json(&path, request).await
    }

    /// `GET /therapy/breathing-exercises`
    pub async fn breathing_exercises(&self) -> ApiResult<Vec<BreathingPattern>> {
        self.get_json("/therapy/breathing-exercises").await
    }

    /// `GET /therapy/mindfulness-sessions`
    pub async fn mindfulness_sessions(&self) -> ApiResult<Vec<MindfulnessSession>> {
        self.get_json("/therapy/mindfulness-sessions").await
    }

    /// `POST /therapy/journal`
    pub async fn save_journal_entry(&self, entry: &NewJournalEntry) -> ApiResult<CbtJournalEntry> {
        self.post_json("/therapy/journal", entry).await
    }

    /// `GET /therapy/journal`
    pub async fn journal_entries(&self) -> ApiResult<Vec<CbtJournalEntry>> {
        self.get_json("/therapy/journal").await
    }
}
