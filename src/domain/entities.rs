use serde::{Deserialize, Serialize};

// Product record shown on the home, details and checkout screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl Product {
    // The single product the marketplace currently offers.
    pub fn placeholder() -> Self {
        Self {
            id: 1,
            name: "Sample Product".to_string(),
            description: "Product Description".to_string(),
            price: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    JazzCash,
    Easypaisa,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::JazzCash, PaymentMethod::Easypaisa];
}

pub const DELIVERY_PARTNER: &str = "TCS";

// Draft produced by the seller's "add product" form. Never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: i64,
}
