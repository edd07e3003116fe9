use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::common::{AcknowledgementState, PurchaseType};

/// Data structure returned by the Google Play Developer API when querying for a
/// subscription purchase.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions#SubscriptionPurchase
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPurchaseModel {
    /// This kind represents a subscriptionPurchase object in the
    /// androidpublisher service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Time at which the subscription was granted, in milliseconds since the
    /// epoch.
    #[serde_as(as = "TimestampMilliSeconds<String, Flexible>")]
    pub start_time_millis: DateTime<Utc>,
    /// Time at which the subscription will expire, in milliseconds since the
    /// epoch.
    #[serde_as(as = "TimestampMilliSeconds<String, Flexible>")]
    pub expiry_time_millis: DateTime<Utc>,
    /// Time at which the subscription will be automatically resumed. Only
    /// present if the user has requested to pause the subscription.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_resume_time_millis: Option<DateTime<Utc>>,
    /// Whether the subscription will automatically be renewed when it reaches
    /// its current expiry time.
    #[serde(default)]
    pub auto_renewing: bool,
    /// ISO 4217 currency code for the subscription price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_currency_code: Option<String>,
    /// Price of the subscription in micro-units. Does not include tax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_amount_micros: Option<String>,
    /// ISO 3166-1 alpha-2 billing country/region code of the user at the time
    /// the subscription was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_payload: Option<String>,
    /// The payment state of the subscription. Not present for canceled,
    /// expired subscriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_state: Option<PaymentState>,
    /// The reason why a subscription was canceled or is not auto-renewing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<CancelReason>,
    /// The time at which the subscription was canceled by the user.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_cancellation_time_millis: Option<DateTime<Utc>>,
    /// The order id of the latest recurring order associated with the purchase
    /// of the subscription.
    pub order_id: String,
    /// The purchase token of the originating purchase if this subscription is
    /// a re-signup or an upgrade/downgrade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_purchase_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_type: Option<PurchaseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement_state: Option<AcknowledgementState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated_external_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated_external_profile_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PaymentState {
    PaymentPending = 0,
    PaymentReceived = 1,
    FreeTrial = 2,
    PendingDeferredUpgradeOrDowngrade = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CancelReason {
    UserCanceled = 0,
    SystemCanceled = 1,
    ReplacedWithNewSubscription = 2,
    DeveloperCanceled = 3,
}
