pub mod auth_service;
pub mod session;
pub mod wizard;
