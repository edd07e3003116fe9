use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::{
    config::VendorEndpoints,
    data::{
        datasources::{
            amazon_receipt_verification_datasource::{
                AmazonReceiptVerificationDatasource, AmazonReceiptVerificationDatasourceImpl,
            },
            app_store_verify_receipt_datasource::{
                AppStoreVerifyReceiptDatasource, AppStoreVerifyReceiptDatasourceImpl,
            },
            google_play_developer_api_datasource::{
                GooglePlayDeveloperApiDatasource, GooglePlayDeveloperApiDatasourceImpl,
            },
            roku_transaction_service_datasource::{
                RokuTransactionServiceDatasource, RokuTransactionServiceDatasourceImpl,
            },
        },
        models::{
            amazon_receipt_verification::receipt_model as am,
            app_store_verify_receipt::{
                request_body_model::VerifyReceiptRequestModel, response_body_model as ar,
            },
            google_play_developer_api::{
                product_purchase_model as gp, purchase_model::GooglePlayPurchaseModel,
                subscription_purchase_model as gs,
            },
            roku_transaction_service::validate_transaction_model as rt,
        },
    },
    domain::{
        entities::{
            payment::Payment,
            receipt::{OriginalReceipt, Receipt},
        },
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::{IapError, Result},
};

static ROKU_TRANSACTION_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("static regex")
});

static ROKU_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/Date\((-?\d+)").expect("static regex"));

pub struct ReceiptRepositoryImpl<
    A: AppStoreVerifyReceiptDatasource,
    B: GooglePlayDeveloperApiDatasource,
    C: AmazonReceiptVerificationDatasource,
    D: RokuTransactionServiceDatasource,
> {
    app_store_verify_receipt_datasource: A,
    google_play_developer_api_datasource: B,
    amazon_receipt_verification_datasource: C,
    roku_transaction_service_datasource: D,
}

#[async_trait]
impl<
        A: AppStoreVerifyReceiptDatasource,
        B: GooglePlayDeveloperApiDatasource,
        C: AmazonReceiptVerificationDatasource,
        D: RokuTransactionServiceDatasource,
    > ReceiptRepository for ReceiptRepositoryImpl<A, B, C, D>
{
    async fn verify_app_store_receipt(&self, payment: &Payment) -> Result<Receipt> {
        let receipt = required_receipt(payment)?;
        let secret = required("secret", &payment.secret)?;

        let response = self
            .app_store_verify_receipt_datasource
            .verify_receipt(&VerifyReceiptRequestModel {
                receipt_data: receipt.to_owned(),
                password: secret.to_owned(),
                exclude_old_transactions: payment.exclude_old_transactions,
            })
            .await?;

        if !response.status.is_accepted() {
            warn!(status = response.status.0, "App Store rejected receipt");
            return Err(IapError::AppStore {
                status: response.status.0,
                message: response.status.message().to_owned(),
            });
        }

        Receipt::from_app_store_response(payment, response)
    }

    async fn verify_google_play_receipt(&self, payment: &Payment) -> Result<Receipt> {
        let package_name = required("packageName", &payment.package_name)?;
        let product_id = required("productId", &payment.product_id)?;
        let token = required_receipt(payment)?;
        let key_file = required("keyFile", &payment.key_file)?;

        let access_token = self
            .google_play_developer_api_datasource
            .build_access_token(key_file)
            .await?;

        if payment.is_subscription() {
            let m = self
                .google_play_developer_api_datasource
                .get_subscription_purchase(package_name, product_id, token, &access_token)
                .await?;
            Ok(Receipt::from_google_subscription_purchase(
                package_name,
                product_id,
                m,
            ))
        } else {
            let m = self
                .google_play_developer_api_datasource
                .get_product_purchase(package_name, product_id, token, &access_token)
                .await?;
            Ok(Receipt::from_google_product_purchase(
                package_name,
                product_id,
                token,
                m,
            ))
        }
    }

    async fn verify_amazon_appstore_receipt(&self, payment: &Payment) -> Result<Receipt> {
        let receipt = required_receipt(payment)?;
        let user_id = required("userId", &payment.user_id)?;
        let secret = required("secret", &payment.secret)?;

        let m = self
            .amazon_receipt_verification_datasource
            .verify_receipt_id(secret, user_id, receipt)
            .await?;
        Ok(Receipt::from_amazon_receipt(m))
    }

    async fn verify_roku_receipt(&self, payment: &Payment) -> Result<Receipt> {
        let dev_token = required("devToken", &payment.dev_token)?;
        let receipt = required_receipt(payment)?;
        if !ROKU_TRANSACTION_ID.is_match(receipt) {
            return Err(IapError::invalid_format(
                "receipt",
                "receipt does not follow the expected format, eg (6ccb40bf-bd7a-49dc-9846-aafd01890ba5).",
            ));
        }

        let m = self
            .roku_transaction_service_datasource
            .validate_transaction(dev_token, receipt)
            .await?;
        if let Some(message) = m.error_message.as_deref().filter(|m| !m.is_empty()) {
            warn!(error_message = message, "Roku rejected transaction");
            return Err(IapError::Roku(message.to_owned()));
        }

        Receipt::from_roku_transaction(m)
    }
}

impl
    ReceiptRepositoryImpl<
        AppStoreVerifyReceiptDatasourceImpl,
        GooglePlayDeveloperApiDatasourceImpl,
        AmazonReceiptVerificationDatasourceImpl,
        RokuTransactionServiceDatasourceImpl,
    >
{
    pub(crate) fn new(client: reqwest::Client, endpoints: &VendorEndpoints) -> Self {
        Self {
            app_store_verify_receipt_datasource: AppStoreVerifyReceiptDatasourceImpl::new(
                client.clone(),
                &endpoints.apple_production_url,
                &endpoints.apple_sandbox_url,
            ),
            google_play_developer_api_datasource: GooglePlayDeveloperApiDatasourceImpl::new(
                client.clone(),
                &endpoints.google_play_api_url,
            ),
            amazon_receipt_verification_datasource: AmazonReceiptVerificationDatasourceImpl::new(
                client.clone(),
                &endpoints.amazon_appstore_url,
            ),
            roku_transaction_service_datasource: RokuTransactionServiceDatasourceImpl::new(
                client,
                &endpoints.roku_transaction_url,
            ),
        }
    }
}

impl Receipt {
    fn from_app_store_response(
        payment: &Payment,
        m: ar::VerifyReceiptResponseModel,
    ) -> Result<Self> {
        let no_purchases =
            || IapError::invalid_input("receipt", "receipt contains no in-app purchases");
        let app_receipt = m.receipt.as_ref().ok_or_else(no_purchases)?;
        let latest = latest_in_app_purchase(&app_receipt.in_app).ok_or_else(no_purchases)?;

        if let Some(product_id) = payment.product_id.as_deref() {
            if product_id != latest.product_id {
                return Err(IapError::invalid_input(
                    "productId",
                    format!(
                        "Wrong product id: {product_id}, expected: {}",
                        latest.product_id
                    ),
                ));
            }
        }
        if let Some(package_name) = payment.package_name.as_deref() {
            if package_name != app_receipt.bundle_id {
                return Err(IapError::invalid_input(
                    "packageName",
                    format!(
                        "Wrong package name: {package_name}, expected: {}",
                        app_receipt.bundle_id
                    ),
                ));
            }
        }

        let product_id = latest.product_id.clone();
        let package_name = app_receipt.bundle_id.clone();
        let transaction_id = latest.transaction_id.clone();
        let purchase_date = latest.purchase_date_ms;
        let expiration_date = latest.expires_date_ms;
        Ok(Receipt {
            product_id,
            package_name: Some(package_name),
            transaction_id,
            purchase_date,
            expiration_date,
            original_receipt_object: OriginalReceipt::Apple(m),
        })
    }

    fn from_google_subscription_purchase(
        package_name: &str,
        product_id: &str,
        m: gs::SubscriptionPurchaseModel,
    ) -> Self {
        Receipt {
            product_id: product_id.to_owned(),
            package_name: Some(package_name.to_owned()),
            transaction_id: m.order_id.clone(),
            purchase_date: m.start_time_millis,
            expiration_date: Some(m.expiry_time_millis),
            original_receipt_object: OriginalReceipt::Google(
                GooglePlayPurchaseModel::Subscription(m),
            ),
        }
    }

    fn from_google_product_purchase(
        package_name: &str,
        product_id: &str,
        token: &str,
        m: gp::ProductPurchaseModel,
    ) -> Self {
        Receipt {
            product_id: product_id.to_owned(),
            package_name: Some(package_name.to_owned()),
            // Test purchases come without an order id.
            transaction_id: m.order_id.clone().unwrap_or_else(|| token.to_owned()),
            purchase_date: m.purchase_time_millis,
            expiration_date: None,
            original_receipt_object: OriginalReceipt::Google(GooglePlayPurchaseModel::Product(m)),
        }
    }

    fn from_amazon_receipt(m: am::AmazonReceiptModel) -> Self {
        Receipt {
            product_id: m.product_id.clone(),
            package_name: None,
            transaction_id: m.receipt_id.clone(),
            purchase_date: m.purchase_date,
            expiration_date: m.cancel_date.or(m.renewal_date),
            original_receipt_object: OriginalReceipt::Amazon(m),
        }
    }

    fn from_roku_transaction(m: rt::RokuTransactionModel) -> Result<Self> {
        let missing = |field: &str| {
            IapError::InvalidResponse(format!("Roku transaction is missing {field}"))
        };
        let purchase_date = m
            .purchase_date
            .as_deref()
            .ok_or_else(|| missing("purchaseDate"))
            .and_then(parse_roku_date)?;
        let expiration_date = m
            .expiration_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(parse_roku_date)
            .transpose()?;
        Ok(Receipt {
            product_id: m.product_id.clone().ok_or_else(|| missing("productId"))?,
            package_name: None,
            transaction_id: m
                .transaction_id
                .clone()
                .ok_or_else(|| missing("transactionId"))?,
            purchase_date,
            expiration_date,
            original_receipt_object: OriginalReceipt::Roku(m),
        })
    }
}

/// The most recently purchased record. Ties go to the later record in the
/// list.
fn latest_in_app_purchase(purchases: &[ar::InAppPurchaseModel]) -> Option<&ar::InAppPurchaseModel> {
    purchases.iter().max_by_key(|p| p.purchase_date_ms)
}

/// Extracts the milliseconds from a `/Date(1581033062000+0000)/` string.
fn parse_roku_date(value: &str) -> Result<DateTime<Utc>> {
    let invalid = || IapError::InvalidResponse(format!("unrecognized Roku date: {value}"));
    let millis: i64 = ROKU_DATE
        .captures(value)
        .and_then(|c| c.get(1))
        .ok_or_else(invalid)?
        .as_str()
        .parse()
        .map_err(|_| invalid())?;
    Utc.timestamp_millis_opt(millis).single().ok_or_else(invalid)
}

fn required_receipt(payment: &Payment) -> Result<&str> {
    if payment.receipt.is_empty() {
        return Err(IapError::invalid_input("receipt", "receipt is required"));
    }
    Ok(&payment.receipt)
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| IapError::invalid_input(field, format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn in_app_purchase(product_id: &str, purchase_date_ms: &str) -> ar::InAppPurchaseModel {
        serde_json::from_value(serde_json::json!({
            "product_id": product_id,
            "transaction_id": format!("tx-{product_id}"),
            "purchase_date_ms": purchase_date_ms,
        }))
        .unwrap()
    }

    #[test]
    fn selects_the_most_recent_purchase() {
        let purchases = vec![
            in_app_purchase("com.company.older", "100"),
            in_app_purchase("com.company.newer", "200"),
        ];
        assert_eq!(
            latest_in_app_purchase(&purchases).unwrap().product_id,
            "com.company.newer"
        );

        let reversed: Vec<_> = purchases.into_iter().rev().collect();
        assert_eq!(
            latest_in_app_purchase(&reversed).unwrap().product_id,
            "com.company.newer"
        );
    }

    #[test]
    fn no_latest_purchase_in_empty_list() {
        assert!(latest_in_app_purchase(&[]).is_none());
    }

    #[test]
    fn parses_roku_dates() {
        assert_eq!(
            parse_roku_date("/Date(1581033062000+0000)/").unwrap(),
            Utc.timestamp_millis_opt(1581033062000).unwrap()
        );
        assert_eq!(
            parse_roku_date("/Date(1573084394000-0500)/").unwrap(),
            Utc.timestamp_millis_opt(1573084394000).unwrap()
        );
        assert!(matches!(
            parse_roku_date("2020-02-06T23:51:02Z"),
            Err(IapError::InvalidResponse(_))
        ));
    }

    #[test]
    fn roku_transaction_ids_must_look_like_uuids() {
        assert!(ROKU_TRANSACTION_ID.is_match("6ccb40bf-bd7a-49dc-9846-aafd01890ba5"));
        assert!(!ROKU_TRANSACTION_ID.is_match("abc123"));
        assert!(!ROKU_TRANSACTION_ID.is_match("6ccb40bf-bd7a-49dc-9846-aafd01890ba5-extra"));
    }

    #[test]
    fn empty_or_absent_fields_are_missing() {
        assert_eq!(required("secret", &Some("s".to_owned())).unwrap(), "s");
        assert_eq!(required("secret", &None).unwrap_err().field(), Some("secret"));
        assert_eq!(
            required("secret", &Some(String::new())).unwrap_err().field(),
            Some("secret")
        );
        assert_eq!(
            required_receipt(&Payment::default()).unwrap_err().field(),
            Some("receipt")
        );
    }

    #[test]
    fn amazon_expiration_prefers_cancel_date() {
        let m: am::AmazonReceiptModel = serde_json::from_value(serde_json::json!({
            "receiptId": "abc123",
            "productId": "lorem-ipsum-amazon",
            "purchaseDate": 1584232340334_i64,
            "renewalDate": "1584235003908",
            "cancelDate": "1584233000000",
        }))
        .unwrap();
        let receipt = Receipt::from_amazon_receipt(m);
        assert_eq!(
            receipt.expiration_date,
            Some(Utc.timestamp_millis_opt(1584233000000).unwrap())
        );
        assert_eq!(receipt.transaction_id, "abc123");
        assert_eq!(receipt.package_name, None);
    }
}
