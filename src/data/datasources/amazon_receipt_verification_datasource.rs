use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::{
    data::models::amazon_receipt_verification::receipt_model::AmazonReceiptModel,
    errors::{IapError, Result},
};

use super::utils::endpoint_url;

#[async_trait]
pub trait AmazonReceiptVerificationDatasource: Send + Sync {
    /// verifyReceiptId:
    /// https://developer.amazon.com/docs/in-app-purchasing/iap-rvs-for-android-apps.html
    ///
    /// secret:
    ///   The developer's shared secret.
    /// userId:
    ///   The Amazon user id the purchase belongs to.
    /// receiptId:
    ///   The receipt id returned to the device with the purchase.
    async fn verify_receipt_id(
        &self,
        secret: &str,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<AmazonReceiptModel>;
}

pub struct AmazonReceiptVerificationDatasourceImpl {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl AmazonReceiptVerificationDatasource for AmazonReceiptVerificationDatasourceImpl {
    async fn verify_receipt_id(
        &self,
        secret: &str,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<AmazonReceiptModel> {
        let url = endpoint_url(
            &self.base_url,
            &["developer", secret, "user", user_id, "receiptId", receipt_id],
        )?;
        debug!(user_id, receipt_id, "calling Amazon Receipt Verification Service");
        let response = self.client.get(url).send().await?;

        if let Some(message) = rejection_message(response.status()) {
            warn!(status = %response.status(), user_id, "Amazon rejected receipt");
            return Err(IapError::AmazonAppstore(message.to_owned()));
        }

        Ok(response.json().await?)
    }
}

impl AmazonReceiptVerificationDatasourceImpl {
    pub(crate) fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
        }
    }
}

/// Status codes with a documented meaning. Anything else carries a receipt.
fn rejection_message(status: StatusCode) -> Option<&'static str> {
    match status.as_u16() {
        400 => Some("receipt is invalid, or no transaction was found for this receipt."),
        496 => Some("Invalid secret."),
        497 => Some("Invalid userId."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_documented_status_codes() {
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST),
            Some("receipt is invalid, or no transaction was found for this receipt.")
        );
        assert_eq!(
            rejection_message(StatusCode::from_u16(496).unwrap()),
            Some("Invalid secret.")
        );
        assert_eq!(
            rejection_message(StatusCode::from_u16(497).unwrap()),
            Some("Invalid userId.")
        );
        assert_eq!(rejection_message(StatusCode::OK), None);
    }
}
