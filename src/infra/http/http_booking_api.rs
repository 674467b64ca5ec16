use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::booking::{
    Availability, AvailabilityQuery, Booking, CreateBookingRequest, CreateReservationRequest,
    Reservation,
};
use crate::domain::ports::BookingApi;
use crate::error::ApiError;
use crate::infra::http::api_client::ApiClient;

pub struct HttpBookingApi {
    client: Arc<ApiClient>,
}

impl HttpBookingApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<Availability, ApiError> {
        self.client
            .get_with_query("/booking/availability/check", query)
            .await
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> Result<Reservation, ApiError> {
        self.client.post("/booking/reservation", request).await
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, ApiError> {
        self.client.post("/booking", request).await
    }
}
