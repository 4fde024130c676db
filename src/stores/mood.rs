use super::{LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{HistoryPeriod, MoodEntry, MoodInsights, NewMoodEntry};

/// History window requested when the mood screen opens.
pub const DEFAULT_HISTORY_PERIOD: HistoryPeriod = HistoryPeriod::Month;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodState {
    /// Most recent first.
    pub history: Vec<MoodEntry>,
    pub insights: Option<MoodInsights>,
}

#[derive(Debug, Clone)]
pub struct MoodStore {
    api: ApiClient,
    state: Shared<MoodState>,
    loading: LoadingFlag,
}

impl MoodStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(MoodState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> MoodState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Record a check-in; the stored entry becomes the head of the history.
    pub async fn log_mood(&self, entry: &NewMoodEntry) -> ApiResult<MoodEntry> {
        let _loading = self.loading.begin();
        let saved = self.api.log_mood(entry).await?;
        tracing::debug!("Logged mood level {}", saved.level.value());
        self.state.lock().history.insert(0, saved.clone());
        Ok(saved)
    }

    pub async fn fetch_history(&self, period: HistoryPeriod) -> ApiResult<Vec<MoodEntry>> {
        let _loading = self.loading.begin();
        let history = self.api.mood_history(period).await?;
        self.state.lock().history = history.clone();
        Ok(history)
    }

    pub async fn fetch_insights(&self) -> ApiResult<MoodInsights> {
        let _loading = self.loading.begin();
        let insights = self.api.mood_insights().await?;
        self.state.lock().insights = Some(insights.clone());
        Ok(insights)
    }
}
