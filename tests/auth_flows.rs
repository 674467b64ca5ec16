mod common;

use std::sync::atomic::Ordering;

use booking_client::domain::models::auth::{ChangePasswordRequest, ResetPasswordRequest};
use booking_client::error::ApiError;
use common::TestFlow;

#[tokio::test]
async fn logout_clears_the_session_even_when_the_call_fails() {
    let flow = TestFlow::new();
    flow.sign_in_session();
    flow.auth_api.fail_logout.store(true, Ordering::SeqCst);

    let result = flow.auth.logout().await;

    assert!(result.is_err());
    assert!(!flow.session.is_authenticated());
    assert!(flow.session.user().is_none());
}

#[tokio::test]
async fn reset_password_is_validated_before_any_request() {
    let flow = TestFlow::new();

    let result = flow
        .auth
        .reset_password(&ResetPasswordRequest {
            token: "reset-tok".to_string(),
            new_password: "short".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Validation(Some(_)))));
    assert_eq!(flow.auth_api.reset_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_reset_password_reaches_the_backend() {
    let flow = TestFlow::new();

    let response = flow
        .auth
        .reset_password(&ResetPasswordRequest {
            token: "reset-tok".to_string(),
            new_password: "Secret123!".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.message, "Password updated");
    assert_eq!(flow.auth_api.reset_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn change_password_applies_the_same_password_rule() {
    let flow = TestFlow::new();
    flow.sign_in_session();

    let result = flow
        .auth
        .change_password(&ChangePasswordRequest {
            current_password: "Secret123!".to_string(),
            new_password: "alllowercase1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Validation(Some(_)))));
}

#[tokio::test]
async fn forgot_password_returns_the_backend_confirmation() {
    let flow = TestFlow::new();

    let response = flow.auth.forgot_password("alice@example.com").await.unwrap();
    assert_eq!(response.message, "Reset email sent");
}
