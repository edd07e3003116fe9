use serde::{Deserialize, Serialize};

/// Receipt to verify, together with the credentials needed to verify it.
///
/// Only `receipt` is common to all stores. Every other field is used by one or
/// two stores and ignored by the rest:
///
/// | field                      | apple    | google   | amazon   | roku     |
/// |----------------------------|----------|----------|----------|----------|
/// | `secret`                   | required |          | required |          |
/// | `exclude_old_transactions` | optional |          |          |          |
/// | `product_id`               | checked  | required |          |          |
/// | `package_name`             | checked  | required |          |          |
/// | `key_file`                 |          | required |          |          |
/// | `subscription`             |          | optional |          |          |
/// | `user_id`                  |          |          | required |          |
/// | `dev_token`                |          |          |          | required |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// The base64 receipt data for Apple, the purchase token for Google, the
    /// receipt id for Amazon or the transaction id for Roku.
    pub receipt: String,
    /// Apple's shared secret, or Amazon's developer secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Apple's `exclude-old-transactions` parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_old_transactions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The Android package name or the iOS bundle id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    /// Path to the Google service account key file (JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<String>,
    /// Set when the Google purchase is a subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<bool>,
    /// Amazon user id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Roku developer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_token: Option<String>,
}

impl Payment {
    pub fn new(receipt: impl Into<String>) -> Self {
        Self {
            receipt: receipt.into(),
            ..Default::default()
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn with_exclude_old_transactions(mut self, exclude: bool) -> Self {
        self.exclude_old_transactions = Some(exclude);
        self
    }

    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_key_file(mut self, key_file: impl Into<String>) -> Self {
        self.key_file = Some(key_file.into());
        self
    }

    pub fn with_subscription(mut self, subscription: bool) -> Self {
        self.subscription = Some(subscription);
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_dev_token(mut self, dev_token: impl Into<String>) -> Self {
        self.dev_token = Some(dev_token.into());
        self
    }

    pub(crate) fn is_subscription(&self) -> bool {
        self.subscription.unwrap_or(false)
    }
}
