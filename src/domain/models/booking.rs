use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Candidate availability window offered by one staff member.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub master_id: String,
    pub master_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub service_id: String,
    pub service_name: String,
    pub service_duration: i32,
    #[serde(default)]
    pub available_slots: Vec<TimeSlot>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub business_settings_id: String,
    pub intervention_id: String,
    pub master_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Temporary server-side hold on a slot. The client keeps only the id and
/// the expiry; the record itself is backend-owned.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub business_settings_id: String,
    pub intervention_id: String,
    pub master_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub business_settings_id: String,
    pub intervention_id: String,
    pub master_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
}

/// The durable booking record as the backend returns it.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub business_settings_id: String,
    pub intervention_id: String,
    pub master_id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// In-progress booking accumulated across wizard steps. Fields are filled
/// incrementally and never cleared by back navigation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub service_id: Option<String>,
    pub service_name: Option<String>,
    pub master_id: Option<String>,
    pub master_name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub reservation_id: Option<String>,
}

impl BookingDraft {
    /// A booking can be finalized once service, master and time window are
    /// all known. The reservation id is passed through when present but its
    /// absence never blocks finalization.
    pub fn is_complete(&self) -> bool {
        self.service_id.is_some()
            && self.master_id.is_some()
            && self.start_time.is_some()
            && self.end_time.is_some()
    }
}

/// Snapshot of an in-progress booking persisted across the social-login
/// redirect so the flow can resume on the callback page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingBooking {
    pub business_settings_id: String,
    #[serde(flatten)]
    pub draft: BookingDraft,
}
