use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::common::{AcknowledgementState, PurchaseType};

/// Data structure returned by the Google Play Developer API when querying for a
/// product purchase.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products#ProductPurchase
///
/// Whether fields are nullable is not documented explicitly in the API
/// reference, so reasonable assumptions are made.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPurchaseModel {
    /// This kind represents an inappPurchase object in the androidpublisher
    /// service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The time the product was purchased, in milliseconds since the epoch (Jan
    /// 1, 1970).
    #[serde_as(as = "TimestampMilliSeconds<String, Flexible>")]
    pub purchase_time_millis: DateTime<Utc>,
    /// The purchase state of the order.
    pub purchase_state: PurchaseState,
    /// The consumption state of the inapp product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_state: Option<ConsumptionState>,
    /// A developer-specified string that contains supplemental information
    /// about an order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_payload: Option<String>,
    /// The order id associated with the purchase of the inapp product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// The type of purchase of the inapp product. This field is only set if
    /// this purchase was not made using the standard in-app billing flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_type: Option<PurchaseType>,
    /// The acknowledgement state of the inapp product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement_state: Option<AcknowledgementState>,
    /// The purchase token generated to identify this purchase. May not be
    /// present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_token: Option<String>,
    /// The inapp product SKU. May not be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The quantity associated with the purchase of the inapp product. If not
    /// present, the quantity is 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated_external_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated_external_profile_id: Option<String>,
    /// ISO 3166-1 alpha-2 billing region code of the user at the time the
    /// product was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// The quantity eligible for refund, i.e. quantity that hasn't been
    /// refunded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refundable_quantity: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PurchaseState {
    Purchased = 0,
    Canceled = 1,
    Pending = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ConsumptionState {
    YetToBeConsumed = 0,
    Consumed = 1,
}
