use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::domain::models::auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterForm,
    ResetPasswordRequest, SocialProvider, User,
};
use crate::domain::ports::AuthApi;
use crate::domain::services::session::SessionStore;
use crate::error::ApiError;

/// Sign-in orchestration over the auth endpoints: every successful path ends
/// with the session holding a bearer token and the resolved user.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
    config: Config,
}

impl AuthService {
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<SessionStore>, config: Config) -> Self {
        Self {
            api,
            session,
            config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        let response = self.api.login(&request).await?;
        self.session
            .set_auth(response.access_token, response.user.clone());
        info!("User logged in: {}", response.user.id);
        Ok(response.user)
    }

    /// Validates the form client-side, then registers. Validation failures
    /// surface as `ApiError::Validation` so callers render them the same way
    /// as backend rejections.
    pub async fn register(&self, form: &RegisterForm) -> Result<User, ApiError> {
        let request = form
            .validate()
            .map_err(|message| ApiError::Validation(Some(message)))?;

        let response = self.api.register(&request).await?;
        self.session
            .set_auth(response.access_token, response.user.clone());
        info!("User registered: {}", response.user.id);
        Ok(response.user)
    }

    /// Best-effort server-side logout; the local session is cleared even
    /// when the call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.api.logout().await;
        self.session.clear();
        if let Err(ref e) = result {
            warn!("Logout request failed: {}", e);
        }
        result
    }

    /// Consume the `token` query parameter the identity provider redirected
    /// back with. A failed profile fetch leaves the caller unauthenticated.
    pub async fn handle_social_callback(&self, token: &str) -> Result<User, ApiError> {
        self.session.set_token(token.to_string());

        match self.api.profile().await {
            Ok(user) => {
                self.session.set_user(user.clone());
                info!("Social login completed for user {}", user.id);
                Ok(user)
            }
            Err(e) => {
                warn!("Profile fetch after social login failed: {}", e);
                self.session.clear();
                Err(e)
            }
        }
    }

    pub fn social_login_url(&self, provider: SocialProvider) -> &str {
        match provider {
            SocialProvider::Google => &self.config.google_auth_url,
            SocialProvider::Facebook => &self.config.facebook_auth_url,
        }
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.api
            .forgot_password(&ForgotPasswordRequest {
                email: email.to_string(),
            })
            .await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        crate::domain::models::auth::validate_password(&request.new_password)
            .map_err(|message| ApiError::Validation(Some(message)))?;
        self.api.reset_password(request).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        crate::domain::models::auth::validate_password(&request.new_password)
            .map_err(|message| ApiError::Validation(Some(message)))?;
        self.api.change_password(request).await
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }
}
