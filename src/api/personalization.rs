use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{PersonalizationPreferences, Recommendation, TrackInteraction};

impl ApiClient {
    /// `PUT /personalization/preferences`
    pub async fn update_personalization(
        &self,
        preferences: &PersonalizationPreferences,
    ) -> ApiResult<PersonalizationPreferences> {
        self.put_json("/personalization/preferences", preferences)
            .await
    }

    /// `GET /personalization/recommendations`
    pub async fn recommendations(&self) -> ApiResult<Vec<Recommendation>> {
        self.get_json("/personalization/recommendations").await
    }

    /// `POST /personalization/track-interaction`
    pub async fn track_interaction(
        &self,
        interaction: &TrackInteraction,
    ) -> ApiResult<serde_json::Value> {
        self.post_json("/personalization/track-interaction", interaction)
            .await
    }
}
