//! Session service tests covering the observable session cell.

use std::sync::Arc;

use crate::auth::{
    adapters::memory::InMemoryAuthProvider,
    domain::SessionState,
    ports::AuthProviderError,
    services::{SessionError, SessionService},
};
use rstest::{fixture, rstest};

type TestService = SessionService<InMemoryAuthProvider>;

#[fixture]
fn service() -> TestService {
    SessionService::new(Arc::new(InMemoryAuthProvider::new()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_service_reports_loading_until_resumed(service: TestService) {
    let view = service.view();
    assert!(view.current().is_loading());

    service.resume(None);

    assert_eq!(view.current(), SessionState::SignedOut);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_publishes_signed_in_state(service: TestService) {
    let mut view = service.view();

    let user = service
        .sign_up("ada@example.com", "correct horse", Some("Ada"))
        .await
        .expect("sign-up should succeed");

    let observed = view.changed().await.expect("service is alive");
    assert_eq!(observed, SessionState::SignedIn(user.clone()));
    assert_eq!(service.current_user(), Some(user));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_rejects_wrong_password(service: TestService) {
    service
        .sign_up("ada@example.com", "correct horse", None)
        .await
        .expect("sign-up should succeed");
    service.sign_out().await.expect("sign-out should succeed");

    let result = service.sign_in("ada@example.com", "battery staple").await;

    assert!(matches!(
        result,
        Err(SessionError::Provider(AuthProviderError::InvalidCredentials))
    ));
    assert_eq!(service.view().current(), SessionState::SignedOut);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_after_sign_up_returns_same_user(service: TestService) {
    let created = service
        .sign_up("grace@example.com", "compilers", None)
        .await
        .expect("sign-up should succeed");
    service.sign_out().await.expect("sign-out should succeed");

    let signed_in = service
        .sign_in("GRACE@example.com", "compilers")
        .await
        .expect("sign-in should succeed");

    assert_eq!(signed_in, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_sign_up_is_rejected(service: TestService) {
    service
        .sign_up("ada@example.com", "correct horse", None)
        .await
        .expect("first sign-up should succeed");

    let result = service
        .sign_up("ada@example.com", "another secret", None)
        .await;

    assert!(matches!(
        result,
        Err(SessionError::Provider(AuthProviderError::EmailInUse(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_out_clears_every_view(service: TestService) {
    service
        .sign_up("ada@example.com", "correct horse", None)
        .await
        .expect("sign-up should succeed");
    let first = service.view();
    let second = service.view();

    service.sign_out().await.expect("sign-out should succeed");

    assert_eq!(first.current(), SessionState::SignedOut);
    assert_eq!(second.current(), SessionState::SignedOut);
    assert!(service.current_user().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_out_without_session_is_rejected(service: TestService) {
    service.resume(None);
    let result = service.sign_out().await;
    assert!(matches!(result, Err(SessionError::NotSignedIn)));
}
