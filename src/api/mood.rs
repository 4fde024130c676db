use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{HistoryPeriod, MoodEntry, MoodInsights, NewMoodEntry};

impl ApiClient {
    /// `POST /mood/log`
    pub async fn log_mood(&self, entry: &NewMoodEntry) -> ApiResult<MoodEntry> {
        self.post_json("/mood/log", entry).await
    }

    /// `GET /mood/history?period=week|month|year`
    pub async fn mood_history(&self, period: HistoryPeriod) -> ApiResult<Vec<MoodEntry>> {
        self.get_json(&format!("/mood/history?period={}", period.as_str()))
            .await
    }

    /// `GET /mood/insights`
    pub async fn mood_insights(&self) -> ApiResult<MoodInsights> {
        self.get_json("/mood/insights").await
    }
}
