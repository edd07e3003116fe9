mod common;

use chrono::{TimeZone, Utc};
use iap_receipt::{IapError, OriginalReceipt, Payment, ReceiptVerifier};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::endpoints;

const TRANSACTION_ID: &str = "6ccb40bf-bd7a-49dc-9846-aafd01890ba5";
const TRANSACTION_PATH: &str = "/listen/transaction-service.svc/validate-transaction/abc123/6ccb40bf-bd7a-49dc-9846-aafd01890ba5";

fn payment() -> Payment {
    Payment::new(TRANSACTION_ID).with_dev_token("abc123")
}

fn transaction() -> serde_json::Value {
    json!({
        "errorCode": null,
        "errorDetails": null,
        "errorMessage": "",
        "status": 0,
        "OriginalTransactionId": "09898ffd-ce2e-4c3e-a8a2-ab1200a1e0c3",
        "amount": 4.99,
        "cancelled": false,
        "channelId": 123456,
        "channelName": "Company Channel",
        "couponCode": null,
        "creditsApplied": null,
        "currency": "usd",
        "expirationDate": "/Date(1581033062000+0000)/",
        "isEntitled": true,
        "originalPurchaseDate": "/Date(1573084394000+0000)/",
        "partnerReferenceId": null,
        "productId": "CAkJPWMldSfISZbs2sE3_MonthlySub",
        "productName": "Monthly Subscription",
        "purchaseDate": "/Date(1573084394000+0000)/",
        "quantity": 1,
        "rokuCustomerId": "f2a1c1a0e2f34f59b1b9a3c4d5e6f7a8",
        "tax": 0.0,
        "total": 4.99,
        "transactionId": "09898ffd-ce2e-4c3e-a8a2-ab1200a1e0c3",
    })
}

#[tokio::test]
async fn test_parses_validated_transaction() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", TRANSACTION_PATH)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(transaction().to_string())
        .expect(1)
        .create_async()
        .await;

    let verifier = ReceiptVerifier::with_endpoints(endpoints(&server.url())).unwrap();
    let receipt = verifier.verify("roku", &payment()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(receipt.product_id, "CAkJPWMldSfISZbs2sE3_MonthlySub");
    assert_eq!(
        receipt.transaction_id,
        "09898ffd-ce2e-4c3e-a8a2-ab1200a1e0c3"
    );
    assert_eq!(receipt.package_name, None);
    assert_eq!(
        receipt.purchase_date,
        Utc.timestamp_millis_opt(1573084394000).unwrap()
    );
    assert_eq!(
        receipt.expiration_date,
        Some(Utc.timestamp_millis_opt(1581033062000).unwrap())
    );
    assert!(matches!(
        receipt.original_receipt_object,
        OriginalReceipt::Roku(ref t) if t.channel_name.as_deref() == Some("Company Channel")
    ));

    let original = serde_json::to_value(&receipt.original_receipt_object).unwrap();
    assert_eq!(original["platform"], "roku");
    assert_eq!(original["response"], transaction());
}

#[tokio::test]
async fn test_same_reply_gives_same_receipt() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", TRANSACTION_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(transaction().to_string())
        .expect(2)
        .create_async()
        .await;

    let verifier = ReceiptVerifier::with_endpoints(endpoints(&server.url())).unwrap();
    let first = verifier.verify("roku", &payment()).await.unwrap();
    let second = verifier.verify("roku", &payment()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_one_time_purchase_has_no_expiration() {
    let mut body = transaction();
    body["expirationDate"] = json!("");

    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", TRANSACTION_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let verifier = ReceiptVerifier::with_endpoints(endpoints(&server.url())).unwrap();
    let receipt = verifier.verify("roku", &payment()).await.unwrap();

    assert_eq!(receipt.expiration_date, None);
}

#[tokio::test]
async fn test_rejects_transaction_with_error_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", TRANSACTION_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "errorCode": null,
                "errorDetails": null,
                "errorMessage": "Invalid Partner API Key.",
                "status": 1,
                "amount": 0,
                "cancelled": false,
                "channelId": 0,
                "channelName": null,
                "expirationDate": null,
                "productId": null,
                "purchaseDate": null,
                "transactionId": null,
            })
            .to_string(),
        )
        .create_async()
        .await;

    let verifier = ReceiptVerifier::with_endpoints(endpoints(&server.url())).unwrap();
    let err = verifier.verify("roku", &payment()).await.unwrap_err();

    match err {
        IapError::Roku(message) => assert_eq!(message, "Invalid Partner API Key."),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejects_malformed_transaction_id_without_calling_out() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let verifier = ReceiptVerifier::with_endpoints(endpoints(&server.url())).unwrap();
    let err = verifier
        .verify("roku", &Payment::new("abc123").with_dev_token("abc123"))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, IapError::InvalidFormat { field: "receipt", .. }));
    assert_eq!(
        err.to_string(),
        "receipt does not follow the expected format, eg (6ccb40bf-bd7a-49dc-9846-aafd01890ba5)."
    );
}

#[tokio::test]
async fn test_requires_dev_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let verifier = ReceiptVerifier::with_endpoints(endpoints(&server.url())).unwrap();
    let err = verifier
        .verify("roku", &Payment::new(TRANSACTION_ID))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, IapError::InvalidInput { field: "devToken", .. }));
}
