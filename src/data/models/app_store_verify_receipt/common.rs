use serde::{Deserialize, Serialize};

/// Status code of a `verifyReceipt` reply.
///
/// https://developer.apple.com/documentation/appstorereceipts/status
///
/// Kept as a plain number rather than an enum, since Apple reserves the whole
/// 21100-21199 range for internal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptStatus(pub i32);

impl ReceiptStatus {
    pub const VALID: Self = Self(0);
    pub const UNREADABLE_REQUEST: Self = Self(21000);
    pub const MALFORMED_RECEIPT_DATA: Self = Self(21002);
    pub const NOT_AUTHENTICATED: Self = Self(21003);
    pub const SHARED_SECRET_MISMATCH: Self = Self(21004);
    pub const SERVER_UNAVAILABLE: Self = Self(21005);
    pub const SUBSCRIPTION_EXPIRED: Self = Self(21006);
    pub const SANDBOX_RECEIPT_SENT_TO_PRODUCTION: Self = Self(21007);
    pub const PRODUCTION_RECEIPT_SENT_TO_SANDBOX: Self = Self(21008);
    pub const INTERNAL_DATA_ACCESS_ERROR: Self = Self(21009);
    pub const ACCOUNT_NOT_FOUND: Self = Self(21010);

    /// Whether the receipt data in the reply can be trusted. An expired
    /// subscription still comes with a decoded receipt.
    pub fn is_accepted(self) -> bool {
        self == Self::VALID || self == Self::SUBSCRIPTION_EXPIRED
    }

    pub fn message(self) -> &'static str {
        match self.0 {
            0 => "The receipt is valid.",
            21000 => "The App Store could not read the JSON object you provided.",
            21002 => "The data in the receipt-data property was malformed or missing.",
            21003 => "The receipt could not be authenticated.",
            21004 => "The shared secret you provided does not match the shared secret on file for your account.",
            21005 => "The receipt server is not currently available.",
            21006 => "This receipt is valid but the subscription has expired. When this status code is returned to your server, the receipt data is also decoded and returned as part of the response.",
            21007 => "This receipt is from the test environment, but it was sent to the production service for verification. Send it to the test environment service instead.",
            21008 => "This receipt is from the production receipt, but it was sent to the test environment service for verification. Send it to the production environment service instead.",
            21009 => "Internal data access error. Try again later.",
            21010 => "The user account cannot be found or has been deleted.",
            21100..=21199 => "Internal data access error.",
            _ => "The App Store returned an unknown status code.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Sandbox,
    Production,

    #[serde(untagged)]
    Unknown(String),
}
