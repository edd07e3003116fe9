use serde::Serialize;

/// Body posted to `verifyReceipt`.
///
/// https://developer.apple.com/documentation/appstorereceipts/requestbody
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReceiptRequestModel {
    /// The Base64-encoded receipt data.
    #[serde(rename = "receipt-data")]
    pub receipt_data: String,
    /// The app's shared secret.
    pub password: String,
    /// Only include the latest renewal transaction for any subscriptions.
    #[serde(
        rename = "exclude-old-transactions",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_old_transactions: Option<bool>,
}
