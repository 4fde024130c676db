use super::{LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{AnalyticsData, AnalyticsPeriod, ProgressReport};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsState {
    pub period: AnalyticsPeriod,
    pub data: Option<AnalyticsData>,
    pub report: Option<ProgressReport>,
    /// Insights from `/analytics/insights`, independent of the period.
    pub insights: Option<Vec<String>>,
}

impl AnalyticsState {
    /// Insight lines to show: the dedicated list once fetched, otherwise the
    /// ones bundled with the period data.
    pub fn visible_insights(&self) -> Vec<String> {
        match (&self.insights, &self.data) {
            (Some(insights), _) if !insights.is_empty() => insights.clone(),
            (_, Some(data)) => data.insights.clone(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyticsStore {
    api: ApiClient,
    state: Shared<AnalyticsState>,
    loading: LoadingFlag,
}

impl AnalyticsStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(AnalyticsState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> AnalyticsState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Load the data for `period`. The stored period only changes on success.
    pub async fn fetch_analytics(&self, period: AnalyticsPeriod) -> ApiResult<AnalyticsData> {
        let _loading = self.loading.begin();
        let data = self.api.analytics(period).await?;
        let mut state = self.state.lock();
        state.period = period;
        state.data = Some(data.clone());
        Ok(data)
    }

    pub async fn fetch_progress_report(&self) -> ApiResult<ProgressReport> {
        let _loading = self.loading.begin();
        let report = self.api.progress_report().await?;
        self.state.lock().report = Some(report.clone());
        Ok(report)
    }

    pub async fn fetch_insights(&self) -> ApiResult<Vec<String>> {
        let _loading = self.loading.begin();
        let insights = self.api.analytics_insights().await?;
        self.state.lock().insights = Some(insights.clone());
        Ok(insights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::stores::test_support::{mock_api, url};
    use serde_json::json;

    #[tokio::test]
    async fn test_analytics_replaces_data_and_period() {
        let (api, http, _) = mock_api();
        http.set_response(
            &url("/analytics?period=quarter"),
            MockResponse::json(json!({
                "period": "quarter",
                "moodTrend": [3, 4],
                "therapySessionCount": 6,
                "goalProgress": 40
            })),
        );
        let store = AnalyticsStore::new(api);

        store.fetch_analytics(AnalyticsPeriod::Quarter).await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.period, AnalyticsPeriod::Quarter);
        let data = state.data.unwrap();
        assert_eq!(data.average_mood(), Some(3.5));
        assert_eq!(data.mood_sparkline(), vec![60, 80]);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_data() {
        let (api, http, _) = mock_api();
        http.set_response(
            &url("/analytics?period=week"),
            MockResponse::json(json!({"insights": ["Mornings are your best time"]})),
        );
        http.set_response(
            &url("/analytics?period=year"),
            MockResponse::status(503, json!({"message": "Try again later"})),
        );
        let store = AnalyticsStore::new(api);
        store.fetch_analytics(AnalyticsPeriod::Week).await.unwrap();

        let err = store.fetch_analytics(AnalyticsPeriod::Year).await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        let state = store.snapshot();
        assert_eq!(state.period, AnalyticsPeriod::Week);
        assert_eq!(state.visible_insights().len(), 1);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_report_and_insights() {
        let (api, http, _) = mock_api();
        http.set_response(
            &url("/analytics?period=month"),
            MockResponse::json(json!({"insights": ["bundled"]})),
        );
        http.set_response(
            &url("/analytics/progress-report"),
            MockResponse::json(json!({
                "summary": "Steady month", "goalsCompleted": 2, "sessionsCompleted": 9,
                "moodChange": 0.4
            })),
        );
        http.set_response(
            &url("/analytics/insights"),
            MockResponse::json(json!(["You sleep better after evening walks"])),
        );
        let store = AnalyticsStore::new(api);

        store.fetch_analytics(AnalyticsPeriod::Month).await.unwrap();
        assert_eq!(store.snapshot().visible_insights(), vec!["bundled".to_string()]);

        let report = store.fetch_progress_report().await.unwrap();
        store.fetch_insights().await.unwrap();

        assert_eq!(report.goals_completed, 2);
        let state = store.snapshot();
        assert_eq!(state.report.as_ref().unwrap().mood_change, Some(0.4));
        assert_eq!(
            state.visible_insights(),
            vec!["You sleep better after evening walks".to_string()]
        );
    }
}
