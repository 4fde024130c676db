use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    CrisisContact, CrisisResource, CrisisSeverity, CrisisSupportRequest, NewCrisisContact,
    SupportReceipt,
};

impl ApiClient {
    /// `GET /crisis/resources`
    pub async fn crisis_resources(&self) -> ApiResult<Vec<CrisisResource>> {
        self.get_json("/crisis/resources").await
    }

    /// `GET /crisis/contacts`
    pub async fn crisis_contacts(&self) -> ApiResult<Vec<CrisisContact>> {
        self.get_json("/crisis/contacts").await
    }

    /// `POST /crisis/contacts`
    pub async fn add_crisis_contact(&self, contact: &NewCrisisContact) -> ApiResult<CrisisContact> {
        self.post_json("/crisis/contacts", contact).await
    }

    /// `POST /crisis/support`
    ///
    /// Asks the backend to reach out to the user's emergency contacts.
    pub async fn trigger_crisis_support(
        &self,
        severity: CrisisSeverity,
    ) -> ApiResult<SupportReceipt> {
        self.post_json("/crisis/support", &CrisisSupportRequest { severity })
            .await
    }
}
