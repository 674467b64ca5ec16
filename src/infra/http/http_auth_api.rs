use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::auth::{
    AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, MessageResponse,
    RegisterRequest, ResetPasswordRequest, User,
};
use crate::domain::ports::AuthApi;
use crate::error::ApiError;
use crate::infra::http::api_client::ApiClient;

pub struct HttpAuthApi {
    client: Arc<ApiClient>,
}

impl HttpAuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/register", request).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.client.get("/auth/profile").await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_empty("/auth/logout").await
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.post("/auth/forgot-password", request).await
    }

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.post("/auth/reset-password", request).await
    }

    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.post("/auth/change-password", request).await
    }
}
