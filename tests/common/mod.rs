#![allow(dead_code)]

use std::{path::PathBuf, time::Duration};

use iap_receipt::config::VendorEndpoints;

pub const APPLE_PRODUCTION_PATH: &str = "/production/verifyReceipt";
pub const APPLE_SANDBOX_PATH: &str = "/sandbox/verifyReceipt";
pub const GOOGLE_TOKEN_PATH: &str = "/token";

/// Endpoint table pointing every vendor at the given mock server.
pub fn endpoints(server_url: &str) -> VendorEndpoints {
    VendorEndpoints {
        apple_production_url: format!("{server_url}{APPLE_PRODUCTION_PATH}"),
        apple_sandbox_url: format!("{server_url}{APPLE_SANDBOX_PATH}"),
        google_play_api_url: format!("{server_url}/androidpublisher/v3/applications"),
        amazon_appstore_url: format!("{server_url}/version/1.0/verifyReceiptId"),
        roku_transaction_url: format!(
            "{server_url}/listen/transaction-service.svc/validate-transaction"
        ),
        timeout: Duration::from_secs(5),
    }
}

pub fn apple_receipt() -> serde_json::Value {
    serde_json::from_str(include_str!("../fixtures/apple_receipt.json")).unwrap()
}

/// Writes a service account key file whose token endpoint is on the mock
/// server, and returns its path.
pub fn write_key_file(name: &str, server_url: &str) -> PathBuf {
    let key = serde_json::json!({
        "type": "service_account",
        "project_id": "company-project",
        "private_key_id": "0123456789abcdef",
        "private_key": include_str!("../fixtures/key.pem"),
        "client_email": "verifier@company-project.iam.gserviceaccount.com",
        "client_id": "123456789",
        "auth_uri": "https://accounts.google.com/o/oauth2/auth",
        "token_uri": format!("{server_url}{GOOGLE_TOKEN_PATH}"),
        "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
        "client_x509_cert_url": "https://www.googleapis.com/robot/v1/metadata/x509/verifier",
    });
    let path = std::env::temp_dir().join(format!(
        "iap-receipt-{}-{name}.json",
        std::process::id()
    ));
    std::fs::write(&path, key.to_string()).unwrap();
    path
}
