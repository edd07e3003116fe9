use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;
use yup_oauth2::{read_service_account_key, ServiceAccountKey};

use crate::{
    constants::{
        GOOGLE_ANDROID_PUBLISHER_SCOPE, GOOGLE_JWT_BEARER_GRANT_TYPE, GOOGLE_JWT_LIFETIME_SECS,
    },
    data::models::google_play_developer_api::{
        oauth_token_model::{ServiceAccountClaims, TokenRequestModel, TokenResponseModel},
        product_purchase_model::ProductPurchaseModel,
        subscription_purchase_model::SubscriptionPurchaseModel,
    },
    errors::{IapError, Result},
};

use super::utils::endpoint_url;

#[async_trait]
pub trait GooglePlayDeveloperApiDatasource: Send + Sync {
    /// Exchanges a JWT signed with the service account's private key for an
    /// OAuth access token:
    /// https://developers.google.com/identity/protocols/oauth2/service-account#httprest
    ///
    /// key_file:
    ///   Path to the service account key file (JSON), as downloaded from the
    ///   Google Cloud console.
    async fn build_access_token(&self, key_file: &str) -> Result<String>;

    /// purchases.products.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products/get
    ///
    /// packageName:
    ///   The package name of the application the inapp product was sold in (for
    ///   example, 'com.some.thing').
    /// productId:
    ///   The inapp product SKU (for example, 'com.some.thing.inapp1').
    /// token:
    ///   The token provided to the user's device when the inapp product was
    ///   purchased.
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<ProductPurchaseModel>;

    /// purchases.subscriptions.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptions/get
    ///
    /// packageName:
    ///   The package name of the application for which this subscription was
    ///   purchased (for example, 'com.some.thing').
    /// subscriptionId:
    ///   The purchased subscription ID (for example, 'monthly001').
    /// token:
    ///   The token provided to the user's device when the subscription was
    ///   purchased.
    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<SubscriptionPurchaseModel>;
}

pub struct GooglePlayDeveloperApiDatasourceImpl {
    client: reqwest::Client,
    api_url: String,
}

#[async_trait]
impl GooglePlayDeveloperApiDatasource for GooglePlayDeveloperApiDatasourceImpl {
    async fn build_access_token(&self, key_file: &str) -> Result<String> {
        let key = read_service_account_key(key_file)
            .await
            .map_err(IapError::KeyFile)?;
        let assertion = build_jwt(&key, Utc::now())?;

        debug!(token_uri = %key.token_uri, "exchanging service account JWT for access token");
        let response: TokenResponseModel = self
            .client
            .post(&key.token_uri)
            .json(&TokenRequestModel {
                grant_type: GOOGLE_JWT_BEARER_GRANT_TYPE.to_owned(),
                assertion,
            })
            .send()
            .await
            .map_err(wrap_http_error)?
            .error_for_status()
            .map_err(wrap_http_error)?
            .json()
            .await?;
        Ok(response.access_token)
    }

    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<ProductPurchaseModel> {
        let url = self.purchase_url(package_name, "products", product_id, token, access_token)?;
        self.callout(url, "purchases.products.get").await
    }

    async fn get_subscription_purchase(
        &self,
        package_name: &str,
        subscription_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<SubscriptionPurchaseModel> {
        let url = self.purchase_url(
            package_name,
            "subscriptions",
            subscription_id,
            token,
            access_token,
        )?;
        self.callout(url, "purchases.subscriptions.get").await
    }
}

impl GooglePlayDeveloperApiDatasourceImpl {
    pub(crate) fn new(client: reqwest::Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_owned(),
        }
    }

    fn purchase_url(
        &self,
        package_name: &str,
        purchase_type: &str,
        product_id: &str,
        token: &str,
        access_token: &str,
    ) -> Result<Url> {
        let mut url = endpoint_url(
            &self.api_url,
            &[
                package_name,
                "purchases",
                purchase_type,
                product_id,
                "tokens",
                token,
            ],
        )?;
        url.query_pairs_mut()
            .append_pair("access_token", access_token);
        Ok(url)
    }

    async fn callout<T: DeserializeOwned>(&self, url: Url, function_name: &str) -> Result<T> {
        // The query carries the access token, so only the path is logged.
        debug!(path = url.path(), function_name, "calling Google Play Developer API");
        Ok(self
            .client
            .get(url)
            .send()
            .await
            .map_err(wrap_http_error)?
            .error_for_status()
            .map_err(wrap_http_error)?
            .json()
            .await
            .map_err(wrap_http_error)?)
    }
}

/// Builds the self-signed JWT for the OAuth JWT-bearer grant, valid for one
/// hour from `now`.
pub(crate) fn build_jwt(key: &ServiceAccountKey, now: DateTime<Utc>) -> Result<String> {
    let mut header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let claims = ServiceAccountClaims {
        iss: key.client_email.clone(),
        sub: key.client_email.clone(),
        scope: GOOGLE_ANDROID_PUBLISHER_SCOPE.to_owned(),
        aud: key.token_uri.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(GOOGLE_JWT_LIFETIME_SECS)).timestamp(),
    };

    let signing_key = jsonwebtoken::EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(jsonwebtoken::encode(&header, &claims, &signing_key)?)
}

/// Errors carrying an HTTP status of 400 or above become `GooglePlay`; all
/// others are plain transport errors. The query string, which holds the
/// access token, is dropped from the error's URL.
fn wrap_http_error(e: reqwest::Error) -> IapError {
    let e = match e.url().cloned() {
        Some(mut url) => {
            url.set_query(None);
            e.with_url(url)
        }
        None => e,
    };
    match e.status() {
        Some(status) if status.as_u16() >= 400 => IapError::GooglePlay { source: e },
        _ => IapError::Http(e),
    }
}
