use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{AnalyticsData, AnalyticsPeriod, ProgressReport};

impl ApiClient {
    /// `GET /analytics?period=week|month|quarter|year`
    pub async fn analytics(&self, period: AnalyticsPeriod) -> ApiResult<AnalyticsData> {
        self.get_json(&format!("/analytics?period={}", period.as_str()))
            .await
    }

    /// `GET /analytics/progress-report`
    pub async fn progress_report(&self) -> ApiResult<ProgressReport> {
        self.get_json("/analytics/progress-report").await
    }

    /// `GET /analytics/insights`
    pub async fn analytics_insights(&self) -> ApiResult<Vec<String>> {
        self.get_json("/analytics/insights").await
    }
}
