use super::{encode_component, ApiClient};
use crate::error::ApiResult;
use crate::models::{clamp_progress, NewGoal, ProgressUpdate, WellnessGoal};

impl ApiClient {
    /// `GET /goals`
    pub async fn goals(&self) -> ApiResult<Vec<WellnessGoal>> {
        self.get_json("/goals").await
    }

    /// `POST /goals`
    pub async fn create_goal(&self, goal: &NewGoal) -> ApiResult<WellnessGoal> {
        self.post_json("/goals", goal).await
    }

    /// `PUT /goals/{id}/progress`
    ///
    /// `progress` is clamped to 0..=100 before it is sent.
    pub async fn update_goal_progress(
        &self,
        goal_id: &str,
        progress: i32,
    ) -> ApiResult<WellnessGoal> {
        let body = ProgressUpdate {
            progress: clamp_progress(progress),
        };
        let path = format!("/goals/{}/progress", encode_component(goal_id));
        self.put_json(&path, &body).await
    }

    /// `PUT /goals/{id}/complete`
    pub async fn complete_goal(&self, goal_id: &str) -> ApiResult<WellnessGoal> {
        let path = format!("/goals/{}/complete", encode_component(goal_id));
        self.put_json(&path, &serde_json::json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryTokenStore, MockHttpClient, MockResponse};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_progress_is_clamped_before_sending() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(serde_json::json!({
            "id": "g1",
            "title": "Sleep 8h",
            "progress": 100,
            "category": "sleep",
            "completed": true
        })));
        let api = ApiClient::new(
            "http://api.test",
            Arc::new(http.clone()),
            Arc::new(InMemoryTokenStore::new()),
        );

        api.update_goal_progress("g1", 140).await.unwrap();

        let request = &http.get_requests()[0];
        assert_eq!(request.method, "PUT");
        assert_eq!(request.url, "http://api.test/goals/g1/progress");
        assert_eq!(request.json_body().unwrap()["progress"], 100);
    }

    #[tokio::test]
    async fn test_complete_goal_path() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(serde_json::json!({
            "id": "g 1",
            "title": "Walk daily",
            "category": "physical",
            "isCompleted": true
        })));
        let api = ApiClient::new(
            "http://api.test",
            Arc::new(http.clone()),
            Arc::new(InMemoryTokenStore::new()),
        );

        let goal = api.complete_goal("g 1").await.unwrap();

        let request = &http.get_requests()[0];
        assert_eq!(request.method, "PUT");
        assert_eq!(request.url, "http://api.test/goals/g%201/complete");
        assert!(goal.completed);
    }
}
