use crate::domain::models::{
    auth::{
        AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, MessageResponse,
        RegisterRequest, ResetPasswordRequest, User,
    },
    booking::{
        Availability, AvailabilityQuery, Booking, CreateBookingRequest, CreateReservationRequest,
        PendingBooking, Reservation,
    },
    business::{
        BusinessSettings, CreateBusinessSettingsRequest, CreateInterventionRequest,
        CreateMasterRequest, Intervention, Master, UpdateBusinessSettingsRequest,
        UpdateInterventionRequest, UpdateMasterRequest,
    },
    user::{CreateUserRequest, UpdateUserRequest, UpdateUserRoleRequest},
};
use crate::error::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn check_availability(&self, query: &AvailabilityQuery) -> Result<Availability, ApiError>;
    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> Result<Reservation, ApiError>;
    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, ApiError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    async fn profile(&self) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError>;
    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError>;
    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError>;
}

#[async_trait]
pub trait BusinessApi: Send + Sync {
    async fn list_business_settings(&self) -> Result<Vec<BusinessSettings>, ApiError>;
    async fn my_business_settings(&self) -> Result<BusinessSettings, ApiError>;
    async fn business_settings_by_slug(&self, slug: &str) -> Result<BusinessSettings, ApiError>;
    async fn create_business_settings(
        &self,
        request: &CreateBusinessSettingsRequest,
    ) -> Result<BusinessSettings, ApiError>;
    async fn update_business_settings(
        &self,
        id: &str,
        request: &UpdateBusinessSettingsRequest,
    ) -> Result<BusinessSettings, ApiError>;
    async fn delete_business_settings(&self, id: &str) -> Result<(), ApiError>;

    async fn list_interventions(&self) -> Result<Vec<Intervention>, ApiError>;
    async fn intervention_by_id(&self, id: &str) -> Result<Intervention, ApiError>;
    async fn create_intervention(
        &self,
        request: &CreateInterventionRequest,
    ) -> Result<Intervention, ApiError>;
    async fn update_intervention(
        &self,
        id: &str,
        request: &UpdateInterventionRequest,
    ) -> Result<Intervention, ApiError>;
    async fn delete_intervention(&self, id: &str) -> Result<(), ApiError>;

    async fn list_masters(&self) -> Result<Vec<Master>, ApiError>;
    async fn master_by_id(&self, id: &str) -> Result<Master, ApiError>;
    async fn create_master(&self, request: &CreateMasterRequest) -> Result<Master, ApiError>;
    async fn update_master(
        &self,
        id: &str,
        request: &UpdateMasterRequest,
    ) -> Result<Master, ApiError>;
    async fn delete_master(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
pub trait UserAdminApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn user_by_id(&self, id: &str) -> Result<User, ApiError>;
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError>;
    async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User, ApiError>;
    async fn update_user_role(
        &self,
        id: &str,
        request: &UpdateUserRoleRequest,
    ) -> Result<User, ApiError>;
    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;
}

/// Session-scoped stash for the in-progress booking, written right before
/// the browser leaves for a social identity provider.
pub trait DraftStore: Send + Sync {
    fn save(&self, pending: &PendingBooking);
    fn load(&self) -> Option<PendingBooking>;
    fn clear(&self);
}
