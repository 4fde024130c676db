use super::{encode_component, ApiClient};
use crate::error::ApiResult;
use crate::models::{Notification, NotificationSettings};

impl ApiClient {
    /// `GET /notifications`
    pub async fn notifications(&self) -> ApiResult<Vec<Notification>> {
        self.get_json("/notifications").await
    }

    /// `PUT /notifications/{id}/read`
    pub async fn mark_notification_read(&self, notification_id: &str) -> ApiResult<()> {
        let path = format!("/notifications/{}/read", encode_component(notification_id));
        self.put_unit(&path, &serde_json::json!({})).await
    }

    /// `PUT /notifications/settings`
    pub async fn update_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> ApiResult<()> {
        self.put_unit("/notifications/settings", settings).await
    }
}
