use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use booking_client::config::Config;
use booking_client::domain::models::auth::{
    AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, MessageResponse,
    RegisterRequest, ResetPasswordRequest, User, UserRole,
};
use booking_client::domain::models::booking::{
    Availability, AvailabilityQuery, Booking, CreateBookingRequest, CreateReservationRequest,
    Reservation, TimeSlot,
};
use booking_client::domain::ports::{AuthApi, BookingApi};
use booking_client::domain::services::auth_service::AuthService;
use booking_client::domain::services::session::SessionStore;
use booking_client::domain::services::wizard::BookingWizard;
use booking_client::error::ApiError;
use booking_client::infra::store::memory_draft_store::MemoryDraftStore;

pub const BUSINESS_ID: &str = "biz-1";

pub fn test_user() -> User {
    User {
        id: "u1".to_string(),
        email: "alice@example.com".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        avatar: None,
        role: UserRole::Client,
    }
}

pub fn sample_slot() -> TimeSlot {
    TimeSlot {
        start_time: ts("2025-01-01T09:00:00Z"),
        end_time: ts("2025-01-01T09:30:00Z"),
        master_id: "m1".to_string(),
        master_name: "Alice".to_string(),
    }
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("bad timestamp in test fixture")
}

#[derive(Default)]
pub struct MockBookingApi {
    pub slots: Mutex<Vec<TimeSlot>>,
    pub fail_availability: AtomicBool,
    pub fail_reservation: AtomicBool,
    pub fail_booking: AtomicBool,
    pub availability_calls: AtomicUsize,
    pub reservation_calls: AtomicUsize,
    pub booking_calls: AtomicUsize,
    pub last_availability: Mutex<Option<AvailabilityQuery>>,
    pub last_reservation: Mutex<Option<CreateReservationRequest>>,
    pub last_booking: Mutex<Option<CreateBookingRequest>>,
}

impl MockBookingApi {
    pub fn with_slots(slots: Vec<TimeSlot>) -> Self {
        let api = Self::default();
        *api.slots.lock().unwrap() = slots;
        api
    }
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<Availability, ApiError> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_availability.lock().unwrap() = Some(query.clone());

        if self.fail_availability.load(Ordering::SeqCst) {
            return Err(ApiError::Server {
                status: 500,
                message: None,
            });
        }

        Ok(Availability {
            service_id: query.service_id.clone(),
            service_name: "Haircut".to_string(),
            service_duration: 30,
            available_slots: self.slots.lock().unwrap().clone(),
        })
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> Result<Reservation, ApiError> {
        self.reservation_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_reservation.lock().unwrap() = Some(request.clone());

        if self.fail_reservation.load(Ordering::SeqCst) {
            return Err(ApiError::Conflict(Some(
                "Time slot is no longer available".to_string(),
            )));
        }

        Ok(Reservation {
            id: "res-1".to_string(),
            business_settings_id: request.business_settings_id.clone(),
            intervention_id: request.intervention_id.clone(),
            master_id: request.master_id.clone(),
            start_time: request.start_time,
            end_time: request.end_time,
            expires_at: Utc::now() + Duration::minutes(10),
        })
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, ApiError> {
        self.booking_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_booking.lock().unwrap() = Some(request.clone());

        if self.fail_booking.load(Ordering::SeqCst) {
            return Err(ApiError::Server {
                status: 500,
                message: None,
            });
        }

        Ok(Booking {
            id: "bk-1".to_string(),
            business_settings_id: request.business_settings_id.clone(),
            intervention_id: request.intervention_id.clone(),
            master_id: request.master_id.clone(),
            user_id: "u1".to_string(),
            start_time: request.start_time,
            end_time: request.end_time,
            status: "CONFIRMED".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
}

#[derive(Default)]
pub struct MockAuthApi {
    pub fail_login: AtomicBool,
    pub fail_register: AtomicBool,
    pub fail_profile: AtomicBool,
    pub fail_logout: AtomicBool,
    pub login_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    pub reset_calls: AtomicUsize,
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_login.load(Ordering::SeqCst) {
            return Err(ApiError::Unauthorized(Some("Invalid credentials".to_string())));
        }
        Ok(AuthResponse {
            access_token: "token-1".to_string(),
            user: test_user(),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_register.load(Ordering::SeqCst) {
            return Err(ApiError::Conflict(Some("Email already registered".to_string())));
        }
        Ok(AuthResponse {
            access_token: "token-1".to_string(),
            user: User {
                email: request.email.clone(),
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                ..test_user()
            },
        })
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_profile.load(Ordering::SeqCst) {
            return Err(ApiError::Unauthorized(None));
        }
        Ok(test_user())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(ApiError::Server {
                status: 500,
                message: None,
            });
        }
        Ok(())
    }

    async fn forgot_password(
        &self,
        _request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        Ok(MessageResponse {
            message: "Reset email sent".to_string(),
        })
    }

    async fn reset_password(
        &self,
        _request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        Ok(MessageResponse {
            message: "Password updated".to_string(),
        })
    }

    async fn change_password(
        &self,
        _request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        Ok(MessageResponse {
            message: "Password updated".to_string(),
        })
    }
}

/// Everything a wizard needs, wired against mocks. Mirrors the shape of
/// `ClientState` but with inspectable ports.
pub struct TestFlow {
    pub booking: Arc<MockBookingApi>,
    pub auth_api: Arc<MockAuthApi>,
    pub session: Arc<SessionStore>,
    pub drafts: Arc<MemoryDraftStore>,
    pub auth: Arc<AuthService>,
}

impl TestFlow {
    pub fn new() -> Self {
        Self::with_booking(MockBookingApi::with_slots(vec![sample_slot()]))
    }

    pub fn with_booking(booking: MockBookingApi) -> Self {
        let booking = Arc::new(booking);
        let auth_api = Arc::new(MockAuthApi::default());
        let session = Arc::new(SessionStore::new());
        let drafts = Arc::new(MemoryDraftStore::new());
        let auth = Arc::new(AuthService::new(
            auth_api.clone(),
            session.clone(),
            Config::with_api_url("http://localhost:1337"),
        ));

        Self {
            booking,
            auth_api,
            session,
            drafts,
            auth,
        }
    }

    pub fn wizard(&self) -> BookingWizard {
        BookingWizard::new(
            BUSINESS_ID.to_string(),
            self.booking.clone(),
            self.auth.clone(),
            self.session.clone(),
            self.drafts.clone(),
        )
    }

    pub fn sign_in_session(&self) {
        self.session.set_auth("token-1".to_string(), test_user());
    }

    pub fn reservation_calls(&self) -> usize {
        self.booking.reservation_calls.load(Ordering::SeqCst)
    }

    pub fn booking_calls(&self) -> usize {
        self.booking.booking_calls.load(Ordering::SeqCst)
    }

    pub fn availability_calls(&self) -> usize {
        self.booking.availability_calls.load(Ordering::SeqCst)
    }
}
