use std::collections::HashMap;

use super::{LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    PersonalizationPreferences, Recommendation, TrackInteraction, MAX_EFFECTIVENESS,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalizationState {
    /// Preferences as last saved, if they were saved this run.
    pub preferences: Option<PersonalizationPreferences>,
    pub recommendations: Vec<Recommendation>,
    /// Rating given to each interaction, keyed by interaction name.
    pub ratings: HashMap<String, u8>,
}

#[derive(Debug, Clone)]
pub struct PersonalizationStore {
    api: ApiClient,
    state: Shared<PersonalizationState>,
    loading: LoadingFlag,
}

impl PersonalizationStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(PersonalizationState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> PersonalizationState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn update_preferences(
        &self,
        preferences: &PersonalizationPreferences,
    ) -> ApiResult<PersonalizationPreferences> {
        let _loading = self.loading.begin();
        let saved = self.api.update_personalization(preferences).await?;
        self.state.lock().preferences = Some(saved.clone());
        Ok(saved)
    }

    /// Replace the recommendation list.
    pub async fn fetch_recommendations(&self) -> ApiResult<Vec<Recommendation>> {
        let _loading = self.loading.begin();
        let recommendations = self.api.recommendations().await?;
        self.state.lock().recommendations = recommendations.clone();
        Ok(recommendations)
    }

    /// Report how well an interaction worked, on a 1..=5 scale. The
    /// server's response is returned as-is.
    pub async fn track_interaction(
        &self,
        interaction: &str,
        effectiveness: u8,
    ) -> ApiResult<serde_json::Value> {
        let _loading = self.loading.begin();
        let effectiveness = effectiveness.clamp(1, MAX_EFFECTIVENESS);
        let request = TrackInteraction {
            interaction: interaction.to_string(),
            effectiveness,
        };
        let response = self.api.track_interaction(&request).await?;
        self.state
            .lock()
            .ratings
            .insert(interaction.to_string(), effectiveness);
        Ok(response)
    }
}
