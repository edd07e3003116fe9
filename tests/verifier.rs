use std::sync::Arc;

use iap_receipt::{config::VendorEndpoints, HttpReceiptVerifier, IapError, Payment};

/// Application state holding a verifier, as a server would.
struct AppState {
    verifier: HttpReceiptVerifier,
}

#[tokio::test]
async fn test_verifier_can_be_stored_by_callers() {
    let state = AppState {
        verifier: HttpReceiptVerifier::with_endpoints(VendorEndpoints::default()).unwrap(),
    };

    let err = state
        .verifier
        .verify("windows", &Payment::new("abc123"))
        .await
        .unwrap_err();

    assert!(matches!(err, IapError::UnknownPlatform(ref p) if p == "windows"));
    assert_eq!(err.to_string(), "unknown platform: windows");
}

#[tokio::test]
async fn test_verifier_is_shared_between_tasks() {
    let verifier = Arc::new(HttpReceiptVerifier::new().unwrap());

    let handles = ["apple", "google", "amazon", "roku"].map(|platform| {
        let verifier = Arc::clone(&verifier);
        tokio::spawn(async move { verifier.verify(platform, &Payment::default()).await })
    });

    // Every store rejects an empty payment before calling out.
    for handle in handles {
        let err = handle.await.unwrap().unwrap_err();
        assert!(matches!(err, IapError::InvalidInput { .. }), "{err:?}");
    }
}
