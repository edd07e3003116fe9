pub const APPLE_PRODUCTION_VERIFY_RECEIPT_URL: &str = "https://buy.itunes.apple.com/verifyReceipt";
pub const APPLE_SANDBOX_VERIFY_RECEIPT_URL: &str = "https://sandbox.itunes.apple.com/verifyReceipt";

pub const GOOGLE_PLAY_DEVELOPER_API_URL: &str =
    "https://www.googleapis.com/androidpublisher/v3/applications";
pub const GOOGLE_ANDROID_PUBLISHER_SCOPE: &str = "https://www.googleapis.com/auth/androidpublisher";
pub const GOOGLE_JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Lifetime of the self-signed assertion exchanged for an access token.
pub const GOOGLE_JWT_LIFETIME_SECS: i64 = 60 * 60;

pub const AMAZON_APPSTORE_VERIFY_RECEIPT_URL: &str =
    "https://appstore-sdk.amazon.com/version/1.0/verifyReceiptId";

pub const ROKU_VALIDATE_TRANSACTION_URL: &str =
    "https://apipub.roku.com/listen/transaction-service.svc/validate-transaction";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
