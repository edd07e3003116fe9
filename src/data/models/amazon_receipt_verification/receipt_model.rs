use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

/// Data structure returned by the Amazon Receipt Verification Service.
///
/// https://developer.amazon.com/docs/in-app-purchasing/iap-rvs-for-android-apps.html
///
/// Dates are documented as numbers but have been observed as strings, so both
/// encodings are accepted; they are written back as numbers. Amazon sends
/// every field, with `null` for the ones that don't apply, and so does the
/// serialized model.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmazonReceiptModel {
    /// Unique identifier for the purchase.
    pub receipt_id: String,
    /// "CONSUMABLE", "ENTITLED" or "SUBSCRIPTION".
    #[serde(default)]
    pub product_type: Option<String>,
    /// The SKU that was purchased.
    pub product_id: String,
    /// Date of the purchase, in milliseconds since the epoch.
    #[serde_as(as = "TimestampMilliSeconds<i64, Flexible>")]
    pub purchase_date: DateTime<Utc>,
    /// Date the subscription will be renewed. Only set for subscriptions.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub renewal_date: Option<DateTime<Utc>>,
    /// Date the purchase was cancelled, or `None` if it was not.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub cancel_date: Option<DateTime<Utc>>,
    /// Why the purchase was cancelled: 0 by the customer's request, 1 by Amazon
    /// customer service, 2 as a failed subscription renewal.
    #[serde(default)]
    pub cancel_reason: Option<i32>,
    #[serde(default)]
    pub parent_product_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub term_sku: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64, Flexible>>")]
    pub free_trial_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_renewing: Option<bool>,
    /// Whether the purchase was made through App Tester.
    #[serde(default)]
    pub test_transaction: Option<bool>,
    #[serde(default)]
    pub beta_product: Option<bool>,
    /// Undeclared fields, passed through as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
