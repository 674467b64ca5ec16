mod common;

use booking_client::domain::models::auth::SocialProvider;
use booking_client::domain::ports::DraftStore;
use booking_client::domain::services::wizard::{BookingStep, BookingWizard};
use common::{sample_slot, TestFlow, BUSINESS_ID};

#[tokio::test]
async fn social_login_stashes_the_draft_and_returns_the_provider_url() {
    let flow = TestFlow::new();
    let mut wizard = flow.wizard();

    wizard.select_service("svc-1", "Haircut").await.unwrap();
    wizard.select_slot(&sample_slot()).await.unwrap();

    let url = wizard.begin_social_login(SocialProvider::Google).unwrap();
    assert_eq!(url, "http://localhost:1337/auth/google");

    let pending = flow.drafts.load().expect("draft should be stashed");
    assert_eq!(pending.business_settings_id, BUSINESS_ID);
    assert_eq!(pending.draft.service_id.as_deref(), Some("svc-1"));
    assert_eq!(pending.draft.reservation_id.as_deref(), Some("res-1"));

    let facebook = wizard.begin_social_login(SocialProvider::Facebook).unwrap();
    assert_eq!(facebook, "http://localhost:1337/auth/facebook");
}

#[tokio::test]
async fn resumed_wizard_lands_in_auth_with_the_stored_draft() {
    let flow = TestFlow::new();
    let mut wizard = flow.wizard();
    wizard.select_service("svc-1", "Haircut").await.unwrap();
    wizard.select_slot(&sample_slot()).await.unwrap();
    wizard.begin_social_login(SocialProvider::Google).unwrap();
    let draft = wizard.draft().clone();
    drop(wizard);

    let resumed = BookingWizard::resume(
        flow.booking.clone(),
        flow.auth.clone(),
        flow.session.clone(),
        flow.drafts.clone(),
    )
    .expect("stashed draft should resume");

    assert_eq!(resumed.step(), BookingStep::Auth);
    assert_eq!(*resumed.draft(), draft);
}

#[tokio::test]
async fn callback_token_completes_the_resumed_booking() {
    let flow = TestFlow::new();
    let mut wizard = flow.wizard();
    wizard.select_service("svc-1", "Haircut").await.unwrap();
    wizard.select_slot(&sample_slot()).await.unwrap();
    wizard.begin_social_login(SocialProvider::Google).unwrap();
    drop(wizard);

    // Browser comes back with ?token=... and the callback page consumes it.
    flow.auth.handle_social_callback("social-token").await.unwrap();
    assert!(flow.session.is_authenticated());

    let mut resumed = BookingWizard::resume(
        flow.booking.clone(),
        flow.auth.clone(),
        flow.session.clone(),
        flow.drafts.clone(),
    )
    .unwrap();

    let next = resumed.complete_authentication().await.unwrap();
    assert_eq!(next, BookingStep::Complete);
    assert_eq!(flow.booking_calls(), 1);

    // The snapshot is consumed; a later page load must not resume again.
    assert!(flow.drafts.load().is_none());
}

#[tokio::test]
async fn failed_profile_fetch_leaves_the_caller_unauthenticated() {
    let flow = TestFlow::new();
    flow.auth_api
        .fail_profile
        .store(true, std::sync::atomic::Ordering::SeqCst);

    let result = flow.auth.handle_social_callback("social-token").await;

    assert!(result.is_err());
    assert!(!flow.session.is_authenticated());
    assert!(flow.session.user().is_none());
}

#[tokio::test]
async fn resume_without_a_snapshot_yields_no_wizard() {
    let flow = TestFlow::new();
    assert!(BookingWizard::resume(
        flow.booking.clone(),
        flow.auth.clone(),
        flow.session.clone(),
        flow.drafts.clone(),
    )
    .is_none());
}

#[tokio::test]
async fn unauthenticated_resume_cannot_finalize() {
    let flow = TestFlow::new();
    let mut wizard = flow.wizard();
    wizard.select_service("svc-1", "Haircut").await.unwrap();
    wizard.select_slot(&sample_slot()).await.unwrap();
    wizard.begin_social_login(SocialProvider::Google).unwrap();
    drop(wizard);

    // No callback token arrived (user abandoned the provider page).
    let mut resumed = BookingWizard::resume(
        flow.booking.clone(),
        flow.auth.clone(),
        flow.session.clone(),
        flow.drafts.clone(),
    )
    .unwrap();

    let result = resumed.complete_authentication().await;
    assert!(result.is_err());
    assert_eq!(resumed.step(), BookingStep::Auth);
    assert_eq!(flow.booking_calls(), 0);
}
