use super::{LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    default_resources, CrisisContact, CrisisResource, CrisisSeverity, NewCrisisContact,
    SupportReceipt,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrisisState {
    pub resources: Vec<CrisisResource>,
    pub contacts: Vec<CrisisContact>,
    pub last_support: Option<SupportReceipt>,
}

impl CrisisState {
    /// Hotlines to display: the fetched list, or the built-in ones when the
    /// backend has not provided any.
    pub fn visible_resources(&self) -> Vec<CrisisResource> {
        if self.resources.is_empty() {
            default_resources()
        } else {
            self.resources.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrisisStore {
    api: ApiClient,
    state: Shared<CrisisState>,
    loading: LoadingFlag,
}

impl CrisisStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(CrisisState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> CrisisState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn fetch_resources(&self) -> ApiResult<Vec<CrisisResource>> {
        let _loading = self.loading.begin();
        let resources = self.api.crisis_resources().await?;
        self.state.lock().resources = resources.clone();
        Ok(resources)
    }

    pub async fn fetch_contacts(&self) -> ApiResult<Vec<CrisisContact>> {
        let _loading = self.loading.begin();
        let contacts = self.api.crisis_contacts().await?;
        self.state.lock().contacts = contacts.clone();
        Ok(contacts)
    }

    pub async fn add_contact(&self, contact: &NewCrisisContact) -> ApiResult<CrisisContact> {
        let _loading = self.loading.begin();
        let saved = self.api.add_crisis_contact(contact).await?;
        self.state.lock().contacts.push(saved.clone());
        Ok(saved)
    }

    pub async fn trigger_support(&self, severity: CrisisSeverity) -> ApiResult<SupportReceipt> {
        let _loading = self.loading.begin();
        tracing::warn!("Requesting crisis support ({:?})", severity);
        let receipt = self.api.trigger_crisis_support(severity).await?;
        self.state.lock().last_support = Some(receipt.clone());
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::stores::test_support::{mock_api, url};
    use serde_json::json;

    #[test]
    fn test_builtin_resources_until_fetched() {
        let state = CrisisState::default();
        assert!(!state.visible_resources().is_empty());
    }

    #[tokio::test]
    async fn test_add_contact_appends() {
        let (api, http, _) = mock_api();
        http.set_method_response(
            "POST",
            &url("/crisis/contacts"),
            MockResponse::json(json!({"id": "c1", "name": "Alex", "phone": "555-0100", "isEmergency": true})),
        );
        let store = CrisisStore::new(api);

        let contact = NewCrisisContact {
            name: "Alex".to_string(),
            phone: "555-0100".to_string(),
            relationship: None,
            is_emergency: true,
        };
        store.add_contact(&contact).await.unwrap();

        let contacts = store.snapshot().contacts;
        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].is_emergency);
    }

    #[tokio::test]
    async fn test_trigger_support_records_receipt() {
        let (api, http, _) = mock_api();
        http.set_response(
            &url("/crisis/support"),
            MockResponse::json(json!({"message": "Help is on the way", "contactsNotified": 2})),
        );
        let store = CrisisStore::new(api);

        let receipt = store.trigger_support(CrisisSeverity::High).await.unwrap();

        assert_eq!(receipt.contacts_notified, 2);
        assert_eq!(store.snapshot().last_support, Some(receipt));
        assert_eq!(
            http.get_requests()[0].json_body().unwrap(),
            json!({"severity": "high"})
        );
        assert!(!store.is_loading());
    }
}
