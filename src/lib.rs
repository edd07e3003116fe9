pub mod data {
    pub mod datasources {
        pub mod amazon_receipt_verification_datasource;
        pub mod app_store_verify_receipt_datasource;
        pub mod google_play_developer_api_datasource;
        pub mod roku_transaction_service_datasource;
        mod utils;
    }
    pub mod models {
        pub mod amazon_receipt_verification {
            pub mod receipt_model;
        }
        pub mod app_store_verify_receipt {
            pub mod common;
            pub mod request_body_model;
            pub mod response_body_model;
        }
        pub mod google_play_developer_api {
            pub mod common;
            pub(crate) mod oauth_token_model;
            pub mod product_purchase_model;
            pub mod purchase_model;
            pub mod subscription_purchase_model;
        }
        pub mod roku_transaction_service {
            pub mod validate_transaction_model;
        }
    }
    pub mod repositories {
        pub mod receipt_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod payment;
        pub mod platform;
        pub mod receipt;
    }
    pub mod repositories {
        pub mod receipt_repository;
    }
}

pub mod config;
pub mod constants;
pub mod errors;
pub mod util;

pub use domain::entities::{
    payment::Payment,
    platform::Platform,
    receipt::{OriginalReceipt, Receipt},
};
pub use errors::IapError;
pub use util::{verify_payment, HttpReceiptVerifier, ReceiptVerifier};
