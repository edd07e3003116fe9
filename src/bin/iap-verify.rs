use std::process::ExitCode;

use clap::Parser;
use iap_receipt::{config::VendorEndpoints, Payment, ReceiptVerifier};
use tracing_subscriber::EnvFilter;

/// Verify an in-app-purchase receipt with the store that issued it
#[derive(Parser, Debug)]
#[command(name = "iap-verify", version, about, long_about = None)]
struct Cli {
    /// Store that issued the receipt: apple, google, amazon or roku
    #[arg(long, default_value = "apple")]
    platform: String,

    /// Receipt data, purchase token, receipt id or transaction id
    #[arg(long)]
    receipt: String,

    /// Product id the receipt is expected to be for
    #[arg(long = "productId")]
    product_id: Option<String>,

    /// Android package name or iOS bundle id
    #[arg(long = "packageName")]
    package_name: Option<String>,

    /// Apple shared secret, or Amazon developer secret
    #[arg(long, env = "IAP_APPLE_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Amazon developer secret, when different from --secret
    #[arg(long = "amazonSecret", env = "IAP_AMAZON_SECRET", hide_env_values = true)]
    amazon_secret: Option<String>,

    /// Only return the latest renewal of Apple subscriptions
    #[arg(long = "excludeOldTransactions")]
    exclude_old_transactions: bool,

    /// Google service account key file (JSON)
    #[arg(long = "keyFile", env = "IAP_GOOGLE_KEY_FILE")]
    key_file: Option<String>,

    /// The Google purchase is a subscription
    #[arg(long)]
    subscription: bool,

    /// Amazon user id
    #[arg(long = "userId")]
    user_id: Option<String>,

    /// Roku developer token
    #[arg(long = "devToken", env = "IAP_ROKU_DEV_TOKEN", hide_env_values = true)]
    dev_token: Option<String>,
}

impl Cli {
    fn payment(&self) -> Payment {
        let secret = if self.platform.eq_ignore_ascii_case("amazon") {
            self.amazon_secret.clone().or_else(|| self.secret.clone())
        } else {
            self.secret.clone()
        };
        Payment {
            receipt: self.receipt.clone(),
            secret,
            exclude_old_transactions: self.exclude_old_transactions.then_some(true),
            product_id: self.product_id.clone(),
            package_name: self.package_name.clone(),
            key_file: self.key_file.clone(),
            subscription: self.subscription.then_some(true),
            user_id: self.user_id.clone(),
            dev_token: self.dev_token.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let verifier = match ReceiptVerifier::with_endpoints(VendorEndpoints::from_env()) {
        Ok(verifier) => verifier,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match verifier.verify(&cli.platform, &cli.payment()).await {
        Ok(receipt) => match serde_json::to_string_pretty(&receipt) {
            Ok(json) => {
                println!("Verified:");
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
