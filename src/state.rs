use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{AuthApi, BookingApi, BusinessApi, DraftStore, UserAdminApi};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::session::SessionStore;
use crate::domain::services::wizard::BookingWizard;

#[derive(Clone)]
pub struct ClientState {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub draft_store: Arc<dyn DraftStore>,
    pub auth_api: Arc<dyn AuthApi>,
    pub booking_api: Arc<dyn BookingApi>,
    pub business_api: Arc<dyn BusinessApi>,
    pub user_api: Arc<dyn UserAdminApi>,
    pub auth_service: Arc<AuthService>,
}

impl ClientState {
    /// Start a fresh booking flow for one business's public page.
    pub fn booking_wizard(&self, business_settings_id: &str) -> BookingWizard {
        BookingWizard::new(
            business_settings_id.to_string(),
            self.booking_api.clone(),
            self.auth_service.clone(),
            self.session.clone(),
            self.draft_store.clone(),
        )
    }

    /// Pick the flow back up after a social-login redirect, if a draft was
    /// stashed before navigating away.
    pub fn resume_booking_wizard(&self) -> Option<BookingWizard> {
        BookingWizard::resume(
            self.booking_api.clone(),
            self.auth_service.clone(),
            self.session.clone(),
            self.draft_store.clone(),
        )
    }
}
