use super::*;
use crate::mail::test_helpers::RecordingTransport;

#[tokio::test]
async fn test_app_state_has_no_mailer() {
    let state = test_helpers::test_app_state();
    assert!(state.mailer.is_none());
}

#[tokio::test]
async fn test_app_state_with_mailer_keeps_sender() {
    let state = test_helpers::test_app_state_with_mailer(Arc::new(RecordingTransport::default()));
    let mailer = state.mailer.expect("mailer configured");
    assert_eq!(mailer.transport.provider(), "recording");
    assert!(mailer.sender.contains("Style Share"));
}

#[tokio::test]
async fn app_state_clone_shares_transport() {
    let transport: Arc<dyn MailTransport> = Arc::new(RecordingTransport::default());
    let state = test_helpers::test_app_state_with_mailer(transport.clone());
    let cloned = state.clone();
    let a = state.mailer.unwrap().transport;
    let b = cloned.mailer.unwrap().transport;
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &transport));
}
