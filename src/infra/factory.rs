use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::session::SessionStore;
use crate::infra::http::api_client::ApiClient;
use crate::infra::http::{
    http_auth_api::HttpAuthApi, http_booking_api::HttpBookingApi,
    http_business_api::HttpBusinessApi, http_user_api::HttpUserAdminApi,
};
use crate::infra::store::memory_draft_store::MemoryDraftStore;
use crate::state::ClientState;

pub fn bootstrap_state(config: &Config) -> ClientState {
    let session = Arc::new(SessionStore::new());
    let api_client = Arc::new(ApiClient::new(config, session.clone()));

    let auth_api = Arc::new(HttpAuthApi::new(api_client.clone()));
    let auth_service = Arc::new(AuthService::new(
        auth_api.clone(),
        session.clone(),
        config.clone(),
    ));

    info!("API client ready for {}", config.api_url);

    ClientState {
        config: config.clone(),
        session,
        draft_store: Arc::new(MemoryDraftStore::new()),
        auth_api,
        booking_api: Arc::new(HttpBookingApi::new(api_client.clone())),
        business_api: Arc::new(HttpBusinessApi::new(api_client.clone())),
        user_api: Arc::new(HttpUserAdminApi::new(api_client)),
        auth_service,
    }
}
