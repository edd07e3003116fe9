use async_trait::async_trait;
use tracing::debug;

use crate::{
    data::models::roku_transaction_service::validate_transaction_model::RokuTransactionModel,
    errors::Result,
};

use super::utils::endpoint_url;

#[async_trait]
pub trait RokuTransactionServiceDatasource: Send + Sync {
    /// validate-transaction:
    /// https://developer.roku.com/docs/developer-program/roku-pay/implementation/web-services-api.md#validate-transaction
    ///
    /// devToken:
    ///   The developer's API key for the channel.
    /// transactionId:
    ///   The transaction id returned to the device with the purchase.
    async fn validate_transaction(
        &self,
        dev_token: &str,
        transaction_id: &str,
    ) -> Result<RokuTransactionModel>;
}

pub struct RokuTransactionServiceDatasourceImpl {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl RokuTransactionServiceDatasource for RokuTransactionServiceDatasourceImpl {
    async fn validate_transaction(
        &self,
        dev_token: &str,
        transaction_id: &str,
    ) -> Result<RokuTransactionModel> {
        let url = endpoint_url(&self.base_url, &[dev_token, transaction_id])?;
        debug!(transaction_id, "calling Roku validate-transaction");
        Ok(self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

impl RokuTransactionServiceDatasourceImpl {
    pub(crate) fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
        }
    }
}
