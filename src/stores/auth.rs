//! Session state: the signed-in user and the bearer token lifecycle.

use super::{LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::{ApiResult, MindwellResult, StorageError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

#[derive(Debug, Clone)]
pub struct AuthStore {
    api: ApiClient,
    state: Shared<AuthState>,
    loading: LoadingFlag,
}

impl AuthStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(AuthState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn user(&self) -> Option<User> {
        self.state.lock().user.clone()
    }

    /// Whether a bearer token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.api.tokens().has_token()
    }

    pub async fn login(&self, email: &str, password: &str) -> MindwellResult<User> {
        let _loading = self.loading.begin();
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await?;
        tracing::info!("Signed in as {}", response.user.email);
        Ok(self.accept(response)?)
    }

    pub async fn register(&self, request: &RegisterRequest) -> MindwellResult<User> {
        let _loading = self.loading.begin();
        let response = self.api.register(request).await?;
        tracing::info!("Registered {}", response.user.email);
        Ok(self.accept(response)?)
    }

    /// Store the token, then the user.
    fn accept(&self, response: AuthResponse) -> Result<User, StorageError> {
        self.api.tokens().set_token(&response.token)?;
        self.state.lock().user = Some(response.user.clone());
        Ok(response.user)
    }

    /// Local sign-out: the token is removed and the user cleared. No request
    /// is made.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.state.lock().user = None;
        self.api.tokens().clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// Fetch the signed-in user.
    ///
    /// Without a stored token no request is made and `Ok(None)` is returned.
    /// Any failure, whether a rejected token, a server error or an
    /// unreachable backend, removes the stored token before the error is
    /// returned.
    pub async fn fetch_current_user(&self) -> ApiResult<Option<User>> {
        if !self.api.tokens().has_token() {
            tracing::debug!("No stored token, skipping /auth/me");
            return Ok(None);
        }
        let _loading = self.loading.begin();
        match self.api.current_user().await {
            Ok(user) => {
                self.state.lock().user = Some(user.clone());
                Ok(Some(user))
            }
            Err(err) => {
                tracing::warn!("Session restore failed, dropping stored token: {}", err);
                self.state.lock().user = None;
                if let Err(clear_err) = self.api.tokens().clear() {
                    tracing::error!("Failed to remove stored token: {}", clear_err);
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::error::{ApiError, MindwellError};
    use crate::stores::test_support::{mock_api, url};
    use crate::traits::{HttpError, TokenStore};
    use serde_json::json;

    fn auth_body() -> serde_json::Value {
        json!({
            "token": "tok-123",
            "user": {
                "id": "u1",
                "email": "sam@example.com",
                "firstName": "Sam",
                "lastName": "Lee"
            }
        })
    }

    #[tokio::test]
    async fn test_login_stores_token_and_user() {
        let (api, http, tokens) = mock_api();
        http.set_response(&url("/auth/login"), MockResponse::json(auth_body()));
        let store = AuthStore::new(api);

        let user = store.login("sam@example.com", "secret123").await.unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(tokens.token().as_deref(), Some("tok-123"));
        assert_eq!(store.user().map(|u| u.id), Some("u1".to_string()));
        assert!(!store.is_loading());
        let body = http.get_requests()[0].json_body().unwrap();
        assert_eq!(body["email"], "sam@example.com");
    }

    #[tokio::test]
    async fn test_login_failure_keeps_signed_out() {
        let (api, http, tokens) = mock_api();
        http.set_response(
            &url("/auth/login"),
            MockResponse::status(401, json!({"message": "Invalid credentials"})),
        );
        let store = AuthStore::new(api);

        let err = store.login("sam@example.com", "wrong").await.unwrap_err();

        assert!(matches!(
            err,
            MindwellError::Api(ApiError::Status { status: 401, .. })
        ));
        assert!(tokens.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_token_write_failure_is_reported() {
        let (api, http, tokens) = mock_api();
        http.set_response(&url("/auth/login"), MockResponse::json(auth_body()));
        tokens.set_writes_should_fail(true);
        let store = AuthStore::new(api);

        let err = store.login("sam@example.com", "secret123").await.unwrap_err();
        assert!(matches!(err, MindwellError::Storage(_)));
        assert!(store.user().is_none());
    }

    #[tokio::test]
    async fn test_fetch_current_user_without_token_makes_no_request() {
        let (api, http, _tokens) = mock_api();
        let store = AuthStore::new(api);

        assert_eq!(store.fetch_current_user().await.unwrap(), None);
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_token_is_cleared() {
        let (api, http, tokens) = mock_api();
        tokens.set_token("stale").unwrap();
        http.set_response(
            &url("/auth/me"),
            MockResponse::status(401, json!({"message": "Token expired"})),
        );
        let store = AuthStore::new(api);

        let err = store.fetch_current_user().await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(tokens.token().is_none());
        assert!(!store.is_authenticated());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_token_cleared_on_server_and_network_errors() {
        for response in [
            MockResponse::status(500, json!({"error": "boom"})),
            MockResponse::Error(HttpError::Timeout("30s".to_string())),
            MockResponse::json(json!({"unexpected": true})),
        ] {
            let (api, http, tokens) = mock_api();
            tokens.set_token("tok-123").unwrap();
            http.set_response(&url("/auth/me"), response);
            let store = AuthStore::new(api);

            assert!(store.fetch_current_user().await.is_err());
            assert!(tokens.token().is_none());
            assert!(store.user().is_none());
        }
    }

    #[tokio::test]
    async fn test_restore_keeps_valid_token() {
        let (api, http, tokens) = mock_api();
        tokens.set_token("tok-123").unwrap();
        http.set_response(&url("/auth/me"), MockResponse::json(auth_body()["user"].clone()));
        let store = AuthStore::new(api);

        let user = store.fetch_current_user().await.unwrap();

        assert_eq!(user.map(|u| u.id), Some("u1".to_string()));
        assert_eq!(tokens.token().as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn test_logout_clears_token_and_user() {
        let (api, http, tokens) = mock_api();
        http.set_response(&url("/auth/login"), MockResponse::json(auth_body()));
        let store = AuthStore::new(api);
        store.login("sam@example.com", "secret123").await.unwrap();
        http.clear_requests();

        store.logout().unwrap();

        assert!(tokens.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
        assert_eq!(store.fetch_current_user().await.unwrap(), None);
        assert!(http.get_requests().is_empty());
    }
}
