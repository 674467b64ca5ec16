use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::auth::User;
use crate::domain::models::user::{CreateUserRequest, UpdateUserRequest, UpdateUserRoleRequest};
use crate::domain::ports::UserAdminApi;
use crate::error::ApiError;
use crate::infra::http::api_client::ApiClient;

// Admin-only endpoints; the backend enforces the role, the client just
// forwards the bearer token.
pub struct HttpUserAdminApi {
    client: Arc<ApiClient>,
}

impl HttpUserAdminApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserAdminApi for HttpUserAdminApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/auth/users").await
    }

    async fn user_by_id(&self, id: &str) -> Result<User, ApiError> {
        self.client.get(&format!("/auth/users/{}", id)).await
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        self.client.post("/auth/users", request).await
    }

    async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User, ApiError> {
        self.client.put(&format!("/auth/users/{}", id), request).await
    }

    async fn update_user_role(
        &self,
        id: &str,
        request: &UpdateUserRoleRequest,
    ) -> Result<User, ApiError> {
        self.client.put(&format!("/auth/users/{}", id), request).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/auth/users/{}", id)).await
    }
}
