pub mod api_client;
pub mod http_auth_api;
pub mod http_booking_api;
pub mod http_business_api;
pub mod http_user_api;
