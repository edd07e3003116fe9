use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::models::{
    amazon_receipt_verification::receipt_model::AmazonReceiptModel,
    app_store_verify_receipt::response_body_model::VerifyReceiptResponseModel,
    google_play_developer_api::purchase_model::GooglePlayPurchaseModel,
    roku_transaction_service::validate_transaction_model::RokuTransactionModel,
};

use super::platform::Platform;

/// A verified purchase, in the same shape whatever store it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub product_id: String,
    /// Bundle id (Apple) or package name (Google). Not known for Amazon and
    /// Roku.
    pub package_name: Option<String>,
    pub transaction_id: String,
    pub purchase_date: DateTime<Utc>,
    /// `None` for purchases that don't expire.
    pub expiration_date: Option<DateTime<Utc>>,
    /// The store's reply, unmodified.
    pub original_receipt_object: OriginalReceipt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "response", rename_all = "lowercase")]
pub enum OriginalReceipt {
    Apple(VerifyReceiptResponseModel),
    Google(GooglePlayPurchaseModel),
    Amazon(AmazonReceiptModel),
    Roku(RokuTransactionModel),
}

impl OriginalReceipt {
    pub fn platform(&self) -> Platform {
        match self {
            Self::Apple(_) => Platform::Apple,
            Self::Google(_) => Platform::Google,
            Self::Amazon(_) => Platform::Amazon,
            Self::Roku(_) => Platform::Roku,
        }
    }
}
