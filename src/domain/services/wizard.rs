use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::models::auth::{LoginRequest, RegisterForm, SocialProvider};
use crate::domain::models::booking::{
    Availability, AvailabilityQuery, Booking, BookingDraft, CreateBookingRequest,
    CreateReservationRequest, PendingBooking, TimeSlot,
};
use crate::domain::ports::{BookingApi, DraftStore};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::session::SessionStore;
use crate::error::ApiError;

pub const MISSING_BOOKING_INFO: &str = "Missing booking information";
pub const AVAILABILITY_FAILED: &str = "Failed to load available time slots. Please try again.";
pub const RESERVATION_FAILED: &str = "Failed to reserve time slot. Please try again.";
pub const BOOKING_FAILED: &str = "Failed to complete booking. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Service,
    Calendar,
    Auth,
    Complete,
}

/// Result of a back navigation: either the wizard moved to an earlier step,
/// or the caller should leave the flow (back from the first step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    MovedTo(BookingStep),
    Exit,
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("action not available in step {0:?}")]
    WrongStep(BookingStep),
    #[error("a request is already in flight")]
    Busy,
    #[error("missing booking information")]
    MissingBookingInfo,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Handle for one availability request. Responses are applied through
/// [`BookingWizard::apply_availability`], which drops anything belonging to
/// a superseded generation: a later date selection invalidates every fetch
/// started before it.
#[derive(Debug, Clone)]
pub struct AvailabilityFetch {
    generation: u64,
    pub query: AvailabilityQuery,
}

/// The booking flow state machine: `Service -> Calendar -> Auth -> Complete`,
/// with `Auth` skipped for signed-in users. Errors are step-local: they are
/// surfaced through [`error`](Self::error) and never change the step.
pub struct BookingWizard {
    business_settings_id: String,
    booking_api: Arc<dyn BookingApi>,
    auth: Arc<AuthService>,
    session: Arc<SessionStore>,
    draft_store: Arc<dyn DraftStore>,
    step: BookingStep,
    draft: BookingDraft,
    error: Option<String>,
    selected_date: NaiveDate,
    slots: Vec<TimeSlot>,
    fetch_generation: u64,
    reservation_expires_at: Option<DateTime<Utc>>,
    pending: bool,
}

impl BookingWizard {
    pub fn new(
        business_settings_id: String,
        booking_api: Arc<dyn BookingApi>,
        auth: Arc<AuthService>,
        session: Arc<SessionStore>,
        draft_store: Arc<dyn DraftStore>,
    ) -> Self {
        Self {
            business_settings_id,
            booking_api,
            auth,
            session,
            draft_store,
            step: BookingStep::Service,
            draft: BookingDraft::default(),
            error: None,
            selected_date: Utc::now().date_naive(),
            slots: Vec::new(),
            fetch_generation: 0,
            reservation_expires_at: None,
            pending: false,
        }
    }

    /// Rebuild a wizard from the snapshot stored before a social-login
    /// redirect. Lands in `Auth`, ready for `complete_authentication` once
    /// the callback token has been consumed.
    pub fn resume(
        booking_api: Arc<dyn BookingApi>,
        auth: Arc<AuthService>,
        session: Arc<SessionStore>,
        draft_store: Arc<dyn DraftStore>,
    ) -> Option<Self> {
        let pending = draft_store.load()?;
        info!(
            "Resuming booking flow for business {}",
            pending.business_settings_id
        );

        let mut wizard = Self::new(
            pending.business_settings_id,
            booking_api,
            auth,
            session,
            draft_store,
        );
        wizard.draft = pending.draft;
        wizard.step = BookingStep::Auth;
        Some(wizard)
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Expiry of the current slot hold, if one exists. Finalization does not
    /// check it client-side; the backend arbitrates lapsed reservations.
    pub fn reservation_expires_at(&self) -> Option<DateTime<Utc>> {
        self.reservation_expires_at
    }

    /// Step 1: pick a service. Merges over the existing draft (a previously
    /// chosen slot is only replaced when a new one is picked) and moves to
    /// the calendar, where availability is fetched for the selected date.
    pub async fn select_service(
        &mut self,
        service_id: &str,
        service_name: &str,
    ) -> Result<(), WizardError> {
        self.guard(BookingStep::Service)?;
        self.error = None;

        self.draft.service_id = Some(service_id.to_string());
        self.draft.service_name = Some(service_name.to_string());
        self.step = BookingStep::Calendar;
        info!("Service selected: {}", service_id);

        // A failed fetch surfaces inline; the step change stands.
        let _ = self.refresh_availability().await;
        Ok(())
    }

    /// Change the calendar day; invalidates any fetch still in flight and
    /// loads slots for the new date.
    pub async fn select_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        self.guard(BookingStep::Calendar)?;
        if date == self.selected_date {
            return Ok(());
        }
        self.selected_date = date;
        self.refresh_availability().await
    }

    /// Start an availability request for the selected date window
    /// (`date ..= date + 1 day`). Each call supersedes all earlier ones.
    pub fn begin_availability_fetch(&mut self) -> Result<AvailabilityFetch, WizardError> {
        self.guard(BookingStep::Calendar)?;
        let service_id = self
            .draft
            .service_id
            .clone()
            .ok_or(WizardError::MissingBookingInfo)?;

        self.fetch_generation += 1;
        Ok(AvailabilityFetch {
            generation: self.fetch_generation,
            query: AvailabilityQuery {
                service_id,
                master_id: None,
                start_date: self.selected_date,
                end_date: self.selected_date + Duration::days(1),
            },
        })
    }

    /// Apply the outcome of an availability request. Returns `None` when
    /// the response belongs to a superseded fetch and was dropped; otherwise
    /// the API failure, if any, is handed back after being surfaced inline.
    pub fn apply_availability(
        &mut self,
        fetch: &AvailabilityFetch,
        outcome: Result<Availability, ApiError>,
    ) -> Option<Result<(), ApiError>> {
        if fetch.generation != self.fetch_generation || self.step != BookingStep::Calendar {
            return None;
        }

        match outcome {
            Ok(availability) => {
                self.error = None;
                self.slots = availability.available_slots;
                Some(Ok(()))
            }
            Err(e) => {
                warn!("Availability fetch failed: {}", e);
                self.error = Some(AVAILABILITY_FAILED.to_string());
                self.slots = Vec::new();
                Some(Err(e))
            }
        }
    }

    pub async fn refresh_availability(&mut self) -> Result<(), WizardError> {
        let fetch = self.begin_availability_fetch()?;
        let outcome = self.booking_api.check_availability(&fetch.query).await;
        match self.apply_availability(&fetch, outcome) {
            Some(Err(e)) => Err(WizardError::Api(e)),
            _ => Ok(()),
        }
    }

    /// Step 2: pick a slot. Creates the server-side hold immediately; on
    /// success the draft gains the master, window and reservation id and the
    /// wizard moves to `Complete` for a signed-in user (finalizing on the
    /// way) or to `Auth` otherwise. On failure the draft and step are
    /// untouched and an inline error invites a retry.
    pub async fn select_slot(&mut self, slot: &TimeSlot) -> Result<BookingStep, WizardError> {
        self.guard(BookingStep::Calendar)?;
        if self.pending {
            return Err(WizardError::Busy);
        }
        let service_id = self
            .draft
            .service_id
            .clone()
            .ok_or(WizardError::MissingBookingInfo)?;
        self.error = None;

        let request = CreateReservationRequest {
            business_settings_id: self.business_settings_id.clone(),
            intervention_id: service_id,
            master_id: slot.master_id.clone(),
            start_time: slot.start_time,
            end_time: slot.end_time,
        };

        self.pending = true;
        let result = self.booking_api.create_reservation(&request).await;
        self.pending = false;

        let reservation = match result {
            Ok(reservation) => reservation,
            Err(e) => {
                warn!("Reservation failed: {}", e);
                self.error = Some(RESERVATION_FAILED.to_string());
                return Err(WizardError::Api(e));
            }
        };

        self.draft.master_id = Some(slot.master_id.clone());
        self.draft.master_name = Some(slot.master_name.clone());
        self.draft.start_time = Some(slot.start_time);
        self.draft.end_time = Some(slot.end_time);
        self.draft.reservation_id = Some(reservation.id);
        self.reservation_expires_at = Some(reservation.expires_at);

        if self.session.is_authenticated() {
            // Complete must always mean a durable booking exists, so a
            // signed-in user finalizes on the spot instead of visiting Auth.
            self.finalize_draft().await?;
            self.step = BookingStep::Complete;
            Ok(BookingStep::Complete)
        } else {
            self.step = BookingStep::Auth;
            Ok(BookingStep::Auth)
        }
    }

    /// Step 3: sign in with credentials, then finalize.
    pub async fn sign_in(&mut self, request: LoginRequest) -> Result<BookingStep, WizardError> {
        self.guard(BookingStep::Auth)?;
        if self.pending {
            return Err(WizardError::Busy);
        }
        self.error = None;

        self.pending = true;
        let result = self.auth.login(request).await;
        self.pending = false;

        match result {
            Ok(_) => self.complete_authentication().await,
            Err(e) => {
                self.error = Some(e.surface_message());
                Err(WizardError::Api(e))
            }
        }
    }

    /// Step 3 alternative: create an account, then finalize.
    pub async fn sign_up(&mut self, form: &RegisterForm) -> Result<BookingStep, WizardError> {
        self.guard(BookingStep::Auth)?;
        if self.pending {
            return Err(WizardError::Busy);
        }
        self.error = None;

        self.pending = true;
        let result = self.auth.register(form).await;
        self.pending = false;

        match result {
            Ok(_) => self.complete_authentication().await,
            Err(e) => {
                self.error = Some(e.surface_message());
                Err(WizardError::Api(e))
            }
        }
    }

    /// Explicit auth-success edge: with a signed-in session and a complete
    /// draft, finalizes exactly once and moves to `Complete`. This is also
    /// the entry point after a resumed social login.
    pub async fn complete_authentication(&mut self) -> Result<BookingStep, WizardError> {
        self.guard(BookingStep::Auth)?;
        if !self.session.is_authenticated() {
            return Err(WizardError::Api(ApiError::Unauthorized(None)));
        }

        self.finalize_draft().await?;
        self.step = BookingStep::Complete;
        Ok(BookingStep::Complete)
    }

    /// Stash the draft and hand back the provider URL to navigate to. The
    /// flow resumes via [`BookingWizard::resume`] on the callback page.
    pub fn begin_social_login(&mut self, provider: SocialProvider) -> Result<String, WizardError> {
        self.guard(BookingStep::Auth)?;
        self.error = None;

        self.draft_store.save(&PendingBooking {
            business_settings_id: self.business_settings_id.clone(),
            draft: self.draft.clone(),
        });
        info!("Draft stashed for social login redirect");

        Ok(self.auth.social_login_url(provider).to_string())
    }

    /// Back navigation. Never clears draft fields: returning to the service
    /// list keeps the chosen service, so re-entering the calendar does not
    /// require re-selection.
    pub fn back(&mut self) -> BackAction {
        self.error = None;
        match self.step {
            BookingStep::Service | BookingStep::Complete => BackAction::Exit,
            BookingStep::Calendar => {
                self.step = BookingStep::Service;
                BackAction::MovedTo(BookingStep::Service)
            }
            BookingStep::Auth => {
                self.step = BookingStep::Calendar;
                BackAction::MovedTo(BookingStep::Calendar)
            }
        }
    }

    async fn finalize_draft(&mut self) -> Result<Booking, WizardError> {
        let request = match self.booking_request() {
            Some(request) => request,
            None => {
                self.error = Some(MISSING_BOOKING_INFO.to_string());
                return Err(WizardError::MissingBookingInfo);
            }
        };

        self.pending = true;
        let result = self.booking_api.create_booking(&request).await;
        self.pending = false;

        match result {
            Ok(booking) => {
                info!("Booking {} confirmed ({})", booking.id, booking.status);
                self.draft_store.clear();
                Ok(booking)
            }
            Err(e) => {
                warn!("Booking creation failed: {}", e);
                self.error = Some(BOOKING_FAILED.to_string());
                Err(WizardError::Api(e))
            }
        }
    }

    fn booking_request(&self) -> Option<CreateBookingRequest> {
        Some(CreateBookingRequest {
            business_settings_id: self.business_settings_id.clone(),
            intervention_id: self.draft.service_id.clone()?,
            master_id: self.draft.master_id.clone()?,
            start_time: self.draft.start_time?,
            end_time: self.draft.end_time?,
            reservation_id: self.draft.reservation_id.clone(),
        })
    }

    fn guard(&self, expected: BookingStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep(self.step))
        }
    }
}
