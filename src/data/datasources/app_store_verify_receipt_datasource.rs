use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    data::models::app_store_verify_receipt::{
        common::ReceiptStatus, request_body_model::VerifyReceiptRequestModel,
        response_body_model::VerifyReceiptResponseModel,
    },
    errors::Result,
};

#[async_trait]
pub trait AppStoreVerifyReceiptDatasource: Send + Sync {
    /// verifyReceipt:
    /// https://developer.apple.com/documentation/appstorereceipts/verifyreceipt
    ///
    /// Production is always asked first. A sandbox receipt is reported back by
    /// production with status 21007, in which case the same body is sent to
    /// the sandbox endpoint and that reply is returned instead.
    async fn verify_receipt(
        &self,
        body: &VerifyReceiptRequestModel,
    ) -> Result<VerifyReceiptResponseModel>;
}

/// Outcome of a call to the production endpoint.
#[derive(Debug)]
pub(crate) enum AppStoreCallout {
    Done(VerifyReceiptResponseModel),
    RetryWithSandbox,
}

impl From<VerifyReceiptResponseModel> for AppStoreCallout {
    fn from(response: VerifyReceiptResponseModel) -> Self {
        if response.status == ReceiptStatus::SANDBOX_RECEIPT_SENT_TO_PRODUCTION {
            Self::RetryWithSandbox
        } else {
            Self::Done(response)
        }
    }
}

pub struct AppStoreVerifyReceiptDatasourceImpl {
    client: reqwest::Client,
    production_url: String,
    sandbox_url: String,
}

#[async_trait]
impl AppStoreVerifyReceiptDatasource for AppStoreVerifyReceiptDatasourceImpl {
    async fn verify_receipt(
        &self,
        body: &VerifyReceiptRequestModel,
    ) -> Result<VerifyReceiptResponseModel> {
        match AppStoreCallout::from(self.callout(&self.production_url, body).await?) {
            AppStoreCallout::Done(response) => Ok(response),
            AppStoreCallout::RetryWithSandbox => {
                info!("receipt is from the sandbox, retrying against the sandbox endpoint");
                self.callout(&self.sandbox_url, body).await
            }
        }
    }
}

impl AppStoreVerifyReceiptDatasourceImpl {
    pub(crate) fn new(client: reqwest::Client, production_url: &str, sandbox_url: &str) -> Self {
        Self {
            client,
            production_url: production_url.to_owned(),
            sandbox_url: sandbox_url.to_owned(),
        }
    }

    async fn callout(
        &self,
        url: &str,
        body: &VerifyReceiptRequestModel,
    ) -> Result<VerifyReceiptResponseModel> {
        debug!(url, "calling verifyReceipt");
        let response: VerifyReceiptResponseModel = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(url, status = response.status.0, "verifyReceipt replied");
        Ok(response)
    }
}
