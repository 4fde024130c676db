use super::{upsert_by_id, LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    BreathingPattern, CbtJournalEntry, CompleteSession, MindfulnessSession, NewJournalEntry,
    TherapySession, TherapyType,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TherapyState {
    /// Session started and not yet completed.
    pub active: Option<TherapySession>,
    /// Sessions completed during this run.
    pub sessions: Vec<TherapySession>,
    pub breathing_exercises: Vec<BreathingPattern>,
    pub mindfulness_sessions: Vec<MindfulnessSession>,
    pub journal_entries: Vec<CbtJournalEntry>,
}

#[derive(Debug, Clone)]
pub struct TherapyStore {
    api: ApiClient,
    state: Shared<TherapyState>,
    loading: LoadingFlag,
}

impl TherapyStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(TherapyState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> TherapyState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Start a session; it becomes the active one.
    pub async fn start_session(&self, session_type: TherapyType) -> ApiResult<TherapySession> {
        let _loading = self.loading.begin();
        let session = self.api.start_session(session_type).await?;
        tracing::debug!("Started {} session {}", session.session_type.label(), session.id);
        self.state.lock().active = Some(session.clone());
        Ok(session)
    }

    /// Complete a session. The active session is cleared and the completed
    /// record is kept in `sessions`.
    pub async fn complete_session(
        &self,
        session_id: &str,
        request: &CompleteSession,
    ) -> ApiResult<TherapySession> {
        let _loading = self.loading.begin();
        let session = self.api.complete_session(session_id, request).await?;
        let mut state = self.state.lock();
        state.active = None;
        upsert_by_id(&mut state.sessions, session.clone(), |s| s.id.as_str());
        Ok(session)
    }

    pub async fn fetch_breathing_exercises(&self) -> ApiResult<Vec<BreathingPattern>> {
        let _loading = self.loading.begin();
        let exercises = self.api.breathing_exercises().await?;
        self.state.lock().breathing_exercises = exercises.clone();
        Ok(exercises)
    }

    pub async fn fetch_mindfulness_sessions(&self) -> ApiResult<Vec<MindfulnessSession>> {
        let _loading = self.loading.begin();
        let sessions = self.api.mindfulness_sessions().await?;
        self.state.lock().mindfulness_sessions = sessions.clone();
        Ok(sessions)
    }

    pub async fn save_journal_entry(&self, entry: &NewJournalEntry) -> ApiResult<CbtJournalEntry> {
        let _loading = self.loading.begin();
        let saved = self.api.save_journal_entry(entry).await?;
        self.state.lock().journal_entries.push(saved.clone());
        Ok(saved)
    }

    pub async fn fetch_journal_entries(&self) -> ApiResult<Vec<CbtJournalEntry>> {
        let _loading = self.loading.begin();
        let entries = self.api.journal_entries().await?;
        self.state.lock().journal_entries = entries.clone();
        Ok(entries)
    }
}
