use std::str::FromStr;

use tracing::debug;

use crate::{
    config::VendorEndpoints,
    data::{
        datasources::{
            amazon_receipt_verification_datasource::AmazonReceiptVerificationDatasourceImpl,
            app_store_verify_receipt_datasource::AppStoreVerifyReceiptDatasourceImpl,
            google_play_developer_api_datasource::GooglePlayDeveloperApiDatasourceImpl,
            roku_transaction_service_datasource::RokuTransactionServiceDatasourceImpl,
        },
        repositories::receipt_repository_impl::ReceiptRepositoryImpl,
    },
    domain::{
        entities::{payment::Payment, platform::Platform, receipt::Receipt},
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::{IapError, Result},
};

/// Entry point of the crate: routes a payment to the store it belongs to.
///
/// Holds no per-call state, so a single instance can be shared between tasks.
pub struct ReceiptVerifier<R: ReceiptRepository> {
    receipt_repository: R,
}

impl<R: ReceiptRepository> ReceiptVerifier<R> {
    pub fn from_repository(receipt_repository: R) -> Self {
        Self { receipt_repository }
    }

    /// Verifies `payment` against the store named by `platform` ("apple",
    /// "google", "amazon" or "roku", in any case).
    pub async fn verify(&self, platform: &str, payment: &Payment) -> Result<Receipt> {
        let platform = Platform::from_str(platform)
            .map_err(|_| IapError::UnknownPlatform(platform.to_owned()))?;
        self.verify_platform(platform, payment).await
    }

    pub async fn verify_platform(&self, platform: Platform, payment: &Payment) -> Result<Receipt> {
        debug!(%platform, "verifying receipt");
        match platform {
            Platform::Apple => self.receipt_repository.verify_app_store_receipt(payment).await,
            Platform::Google => {
                self.receipt_repository
                    .verify_google_play_receipt(payment)
                    .await
            }
            Platform::Amazon => {
                self.receipt_repository
                    .verify_amazon_appstore_receipt(payment)
                    .await
            }
            Platform::Roku => self.receipt_repository.verify_roku_receipt(payment).await,
        }
    }
}

/// Verifier backed by the HTTP datasources, as built by `new` and
/// `with_endpoints`.
pub type HttpReceiptVerifier = ReceiptVerifier<
    ReceiptRepositoryImpl<
        AppStoreVerifyReceiptDatasourceImpl,
        GooglePlayDeveloperApiDatasourceImpl,
        AmazonReceiptVerificationDatasourceImpl,
        RokuTransactionServiceDatasourceImpl,
    >,
>;

impl HttpReceiptVerifier {
    /// Verifier talking to the vendors' production endpoints.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(VendorEndpoints::default())
    }

    pub fn with_endpoints(endpoints: VendorEndpoints) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(endpoints.timeout)
            .build()?;
        Ok(Self {
            receipt_repository: ReceiptRepositoryImpl::new(client, &endpoints),
        })
    }
}

/// Verifies a single payment with a throwaway verifier using the default
/// endpoints. Prefer keeping a `ReceiptVerifier` around when verifying many
/// receipts, so the HTTP connection pool is reused.
pub async fn verify_payment(platform: &str, payment: &Payment) -> Result<Receipt> {
    ReceiptVerifier::new()?.verify(platform, payment).await
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::{
        data::models::roku_transaction_service::validate_transaction_model::RokuTransactionModel,
        domain::entities::receipt::OriginalReceipt,
    };

    use super::*;

    /// Answers every store with a receipt naming the store that was asked.
    struct EchoRepository;

    fn receipt_for(product_id: &str) -> Receipt {
        Receipt {
            product_id: product_id.to_owned(),
            package_name: None,
            transaction_id: "tx".to_owned(),
            purchase_date: Utc.timestamp_millis_opt(0).unwrap(),
            expiration_date: None,
            original_receipt_object: OriginalReceipt::Roku(
                serde_json::from_value::<RokuTransactionModel>(serde_json::json!({})).unwrap(),
            ),
        }
    }

    #[async_trait]
    impl ReceiptRepository for EchoRepository {
        async fn verify_app_store_receipt(&self, _: &Payment) -> Result<Receipt> {
            Ok(receipt_for("apple"))
        }
        async fn verify_google_play_receipt(&self, _: &Payment) -> Result<Receipt> {
            Ok(receipt_for("google"))
        }
        async fn verify_amazon_appstore_receipt(&self, _: &Payment) -> Result<Receipt> {
            Ok(receipt_for("amazon"))
        }
        async fn verify_roku_receipt(&self, _: &Payment) -> Result<Receipt> {
            Err(IapError::Roku("nope".to_owned()))
        }
    }

    #[tokio::test]
    async fn dispatches_on_platform_name() {
        let verifier = ReceiptVerifier::from_repository(EchoRepository);
        let payment = Payment::new("abc123");
        for platform in ["apple", "Google", "AMAZON"] {
            let receipt = verifier.verify(platform, &payment).await.unwrap();
            assert_eq!(receipt.product_id, platform.to_lowercase());
        }
    }

    #[tokio::test]
    async fn propagates_adapter_errors_unchanged() {
        let verifier = ReceiptVerifier::from_repository(EchoRepository);
        let err = verifier
            .verify("roku", &Payment::new("abc123"))
            .await
            .unwrap_err();
        assert!(matches!(err, IapError::Roku(ref m) if m == "nope"));
    }

    #[tokio::test]
    async fn rejects_unknown_platforms() {
        let verifier = ReceiptVerifier::from_repository(EchoRepository);
        let err = verifier
            .verify("windows", &Payment::new("abc123"))
            .await
            .unwrap_err();
        assert!(matches!(err, IapError::UnknownPlatform(ref p) if p == "windows"));
    }
}
