use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Data structure returned by the Roku transaction service's
/// `validate-transaction` call.
///
/// https://developer.roku.com/docs/developer-program/roku-pay/implementation/web-services-api.md
///
/// Dates are WCF-style strings, e.g. `/Date(1581033062000+0000)/`. A failed
/// validation comes back with most fields null, so nearly everything is
/// optional here and checked when mapping. Roku always sends every field, so
/// absent ones are written back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RokuTransactionModel {
    #[serde(default)]
    pub error_code: Option<Value>,
    #[serde(default)]
    pub error_details: Option<Value>,
    /// Empty when the transaction was validated.
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(rename = "OriginalTransactionId", default)]
    pub original_transaction_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub cancelled: Option<bool>,
    #[serde(default)]
    pub channel_id: Option<i64>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub credits_applied: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Empty or absent for purchases that do not expire.
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub is_entitled: Option<bool>,
    #[serde(default)]
    pub original_purchase_date: Option<String>,
    #[serde(default)]
    pub partner_reference_id: Option<Value>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub roku_customer_id: Option<String>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
