use super::{LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{Notification, NotificationSettings};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    pub notifications: Vec<Notification>,
    /// Last settings the server accepted, or the defaults.
    pub settings: NotificationSettings,
}

impl NotificationState {
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[derive(Debug, Clone)]
pub struct NotificationStore {
    api: ApiClient,
    state: Shared<NotificationState>,
    loading: LoadingFlag,
}

impl NotificationStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(NotificationState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> NotificationState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn unread_count(&self) -> usize {
        self.state.lock().unread_count()
    }

    pub async fn fetch(&self) -> ApiResult<Vec<Notification>> {
        let _loading = self.loading.begin();
        let notifications = self.api.notifications().await?;
        self.state.lock().notifications = notifications.clone();
        Ok(notifications)
    }

    pub async fn mark_read(&self, notification_id: &str) -> ApiResult<()> {
        let _loading = self.loading.begin();
        self.api.mark_notification_read(notification_id).await?;
        self.set_read(notification_id);
        Ok(())
    }

    /// Mark every unread notification, one request each. Stops at the first
    /// failure; notifications already marked stay marked.
    pub async fn mark_all_read(&self) -> ApiResult<usize> {
        let _loading = self.loading.begin();
        let unread: Vec<String> = self
            .state
            .lock()
            .notifications
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id.clone())
            .collect();
        for id in &unread {
            self.api.mark_notification_read(id).await?;
            self.set_read(id);
        }
        Ok(unread.len())
    }

    /// Save reminder settings; local settings change only on success.
    pub async fn update_settings(&self, settings: NotificationSettings) -> ApiResult<()> {
        let _loading = self.loading.begin();
        self.api.update_notification_settings(&settings).await?;
        self.state.lock().settings = settings;
        Ok(())
    }

    fn set_read(&self, notification_id: &str) {
        if let Some(n) = self
            .state
            .lock()
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            n.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::models::NotificationSetting;
    use crate::stores::test_support::{mock_api, url};
    use serde_json::json;

    fn inbox() -> MockResponse {
        MockResponse::json(json!([
            {"id": "n1", "type": "reminder", "title": "Check in", "body": "How are you?"},
            {"id": "n2", "type": "goal", "title": "Goal", "body": "Halfway there", "read": false},
            {"id": "n3", "type": "insight", "title": "Insight", "body": "Sleep helps", "read": true}
        ]))
    }

    #[tokio::test]
    async fn test_mark_read_updates_unread_count() {
        let (api, http, _) = mock_api();
        http.set_method_response("GET", &url("/notifications"), inbox());
        http.set_response(&url("/notifications/"), MockResponse::json(json!({})));
        let store = NotificationStore::new(api);

        store.fetch().await.unwrap();
        assert_eq!(store.unread_count(), 2);

        store.mark_read("n1").await.unwrap();
        assert_eq!(store.unread_count(), 1);

        assert_eq!(store.mark_all_read().await.unwrap(), 1);
        assert_eq!(store.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_mark_all_read_sends_one_request_per_unread() {
        let (api, http, _) = mock_api();
        http.set_method_response("GET", &url("/notifications"), inbox());
        http.set_response(&url("/notifications/n1/read"), MockResponse::json(json!({})));
        http.set_response(
            &url("/notifications/n2/read"),
            MockResponse::status(500, json!({"error": "boom"})),
        );
        let store = NotificationStore::new(api);
        store.fetch().await.unwrap();
        http.clear_requests();

        assert!(store.mark_all_read().await.is_err());

        let urls: Vec<String> = http.get_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![url("/notifications/n1/read"), url("/notifications/n2/read")]
        );
        assert_eq!(store.unread_count(), 1);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_update_settings_only_on_success() {
        let (api, http, _) = mock_api();
        http.set_response(
            &url("/notifications/settings"),
            MockResponse::status(500, json!({"error": "boom"})),
        );
        let store = NotificationStore::new(api);
        let mut settings = NotificationSettings::default();
        settings.toggle(NotificationSetting::CommunityUpdates);

        assert!(store.update_settings(settings).await.is_err());
        assert_eq!(store.snapshot().settings, NotificationSettings::default());

        http.set_response(&url("/notifications/settings"), MockResponse::json(json!({})));
        store.update_settings(settings).await.unwrap();

        assert!(store.snapshot().settings.community_updates);
        let request = &http.get_requests()[1];
        assert_eq!(request.method, "PUT");
        assert_eq!(request.json_body().unwrap()["communityUpdates"], true);
    }
}
