use std::{env, time::Duration};

use crate::constants::{
    AMAZON_APPSTORE_VERIFY_RECEIPT_URL, APPLE_PRODUCTION_VERIFY_RECEIPT_URL,
    APPLE_SANDBOX_VERIFY_RECEIPT_URL, DEFAULT_HTTP_TIMEOUT_SECS, GOOGLE_PLAY_DEVELOPER_API_URL,
    ROKU_VALIDATE_TRANSACTION_URL,
};

pub const IAP_APPLE_PRODUCTION_URL: &str = "IAP_APPLE_PRODUCTION_URL";
pub const IAP_APPLE_SANDBOX_URL: &str = "IAP_APPLE_SANDBOX_URL";
pub const IAP_GOOGLE_PLAY_API_URL: &str = "IAP_GOOGLE_PLAY_API_URL";
pub const IAP_AMAZON_APPSTORE_URL: &str = "IAP_AMAZON_APPSTORE_URL";
pub const IAP_ROKU_TRANSACTION_URL: &str = "IAP_ROKU_TRANSACTION_URL";

/// Base URLs of the vendor APIs. Built once and handed to the verifier; never
/// changed afterwards.
///
/// The Google OAuth token endpoint is not part of this table, since it is
/// read from the service account key file of each payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorEndpoints {
    pub apple_production_url: String,
    pub apple_sandbox_url: String,
    /// Everything up to and including `/applications`.
    pub google_play_api_url: String,
    /// Everything up to and including `/verifyReceiptId`.
    pub amazon_appstore_url: String,
    /// Everything up to and including `/validate-transaction`.
    pub roku_transaction_url: String,
    /// Applied to every outbound request.
    pub timeout: Duration,
}

impl Default for VendorEndpoints {
    fn default() -> Self {
        Self {
            apple_production_url: APPLE_PRODUCTION_VERIFY_RECEIPT_URL.to_owned(),
            apple_sandbox_url: APPLE_SANDBOX_VERIFY_RECEIPT_URL.to_owned(),
            google_play_api_url: GOOGLE_PLAY_DEVELOPER_API_URL.to_owned(),
            amazon_appstore_url: AMAZON_APPSTORE_VERIFY_RECEIPT_URL.to_owned(),
            roku_transaction_url: ROKU_VALIDATE_TRANSACTION_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl VendorEndpoints {
    /// Default endpoints, with any URL overridden by its `IAP_*_URL`
    /// environment variable when set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            apple_production_url: env_or(IAP_APPLE_PRODUCTION_URL, defaults.apple_production_url),
            apple_sandbox_url: env_or(IAP_APPLE_SANDBOX_URL, defaults.apple_sandbox_url),
            google_play_api_url: env_or(IAP_GOOGLE_PLAY_API_URL, defaults.google_play_api_url),
            amazon_appstore_url: env_or(IAP_AMAZON_APPSTORE_URL, defaults.amazon_appstore_url),
            roku_transaction_url: env_or(IAP_ROKU_TRANSACTION_URL, defaults.roku_transaction_url),
            timeout: defaults.timeout,
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_vendor_production_hosts() {
        let endpoints = VendorEndpoints::default();
        assert_eq!(
            endpoints.apple_production_url,
            "https://buy.itunes.apple.com/verifyReceipt"
        );
        assert_eq!(
            endpoints.apple_sandbox_url,
            "https://sandbox.itunes.apple.com/verifyReceipt"
        );
        assert_eq!(endpoints.timeout, Duration::from_secs(30));
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(
            env_or("IAP_TEST_UNSET_VARIABLE_FOR_CONFIG", "fallback".to_owned()),
            "fallback"
        );
    }
}
