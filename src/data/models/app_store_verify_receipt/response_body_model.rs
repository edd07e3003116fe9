use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::common::{Environment, ReceiptStatus};

/// Data structure returned by `verifyReceipt`.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody
///
/// Most fields are only present for some receipt types, so everything not
/// needed to build a `Receipt` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyReceiptResponseModel {
    /// Either 0 if the receipt is valid, or a status code if there is an
    /// error.
    pub status: ReceiptStatus,
    /// The environment for which the receipt was generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// An indicator that an error occurred during the request. Only present
    /// for status codes 21100-21199.
    #[serde(
        rename = "is-retryable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_retryable: Option<bool>,
    /// A JSON representation of the receipt that was sent for verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<AppReceiptModel>,
    /// An array that contains all in-app purchase transactions. Only returned
    /// for receipts that contain auto-renewable subscriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_receipt_info: Option<Vec<InAppPurchaseModel>>,
    /// The latest Base64 encoded app receipt. Only returned for receipts that
    /// contain auto-renewable subscriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_receipt: Option<String>,
    /// One element per auto-renewable subscription identified by its product
    /// id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_renewal_info: Option<Vec<PendingRenewalInfoModel>>,
    /// Fields not modelled above, kept so the reply serializes back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppReceiptModel {
    /// The type of receipt generated, e.g. "Production" or "ProductionSandbox".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adam_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_item_id: Option<i64>,
    /// The bundle identifier for the app to which the receipt belongs.
    pub bundle_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_external_identifier: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_creation_date_ms: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_date_ms: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_purchase_date_ms: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_application_version: Option<String>,
    /// The in-app purchase receipt fields for all in-app purchase
    /// transactions.
    #[serde(default)]
    pub in_app: Vec<InAppPurchaseModel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt/in_app
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InAppPurchaseModel {
    /// The number of consumable products purchased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// The unique identifier of the product purchased.
    pub product_id: String,
    /// A unique identifier for a transaction such as a purchase, restore, or
    /// renewal.
    pub transaction_id: String,
    /// The transaction identifier of the original purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_transaction_id: Option<String>,
    /// The time the App Store charged the user's account, in milliseconds
    /// since the epoch.
    #[serde_as(as = "TimestampMilliSeconds<String, Flexible>")]
    pub purchase_date_ms: DateTime<Utc>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_purchase_date_ms: Option<DateTime<Utc>>,
    /// The time a subscription expires or when it will renew, in milliseconds
    /// since the epoch. Absent for anything but auto-renewable subscriptions.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_date_ms: Option<DateTime<Utc>>,
    /// The time the App Store refunded a transaction or revoked it from family
    /// sharing.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date_ms: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_order_line_item_id: Option<String>,
    /// "true" or "false".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trial_period: Option<String>,
    /// "true" or "false".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_in_intro_offer_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotional_offer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_group_identifier: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// https://developer.apple.com/documentation/appstorereceipts/responsebody/pending_renewal_info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRenewalInfoModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_renew_product_id: Option<String>,
    /// "1" if the subscription will renew, "0" if the customer turned off
    /// automatic renewal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_renew_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_in_billing_retry_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
