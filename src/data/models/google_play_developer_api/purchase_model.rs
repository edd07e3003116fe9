use serde::{Deserialize, Serialize};

use super::{
    product_purchase_model::ProductPurchaseModel,
    subscription_purchase_model::SubscriptionPurchaseModel,
};

/// Either document the Play Developer API returns for a purchase token,
/// depending on whether the product is a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GooglePlayPurchaseModel {
    Subscription(SubscriptionPurchaseModel),
    Product(ProductPurchaseModel),
}
