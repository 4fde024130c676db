use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};

impl ApiClient {
    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.post_json("/auth/register", request).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.post_json("/auth/login", request).await
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> ApiResult<User> {
        self.get_json("/auth/me").await
    }
}
