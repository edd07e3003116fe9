use async_trait::async_trait;

use crate::{
    domain::entities::{payment::Payment, receipt::Receipt},
    errors::Result,
};

/// One verification per store. Every method validates the payment fields it
/// needs before making any network call, and either returns a complete
/// `Receipt` or an error.
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Requires `receipt` and `secret`. Checks `product_id` and `package_name`
    /// against the receipt when given.
    async fn verify_app_store_receipt(&self, payment: &Payment) -> Result<Receipt>;

    /// Requires `receipt`, `package_name`, `product_id` and `key_file`.
    async fn verify_google_play_receipt(&self, payment: &Payment) -> Result<Receipt>;

    /// Requires `receipt`, `user_id` and `secret`.
    async fn verify_amazon_appstore_receipt(&self, payment: &Payment) -> Result<Receipt>;

    /// Requires `receipt` and `dev_token`.
    async fn verify_roku_receipt(&self, payment: &Payment) -> Result<Receipt>;
}
