use serde::{Deserialize, Serialize};

use crate::domain::auth::{AuthState, Directive};
use crate::domain::entities::{PaymentMethod, Product, ProductDraft};
use crate::domain::role::Role;

// Entry on the role-selection screen.
#[derive(Debug, Serialize)]
pub struct RoleEntry {
    pub role: Role,
    pub title: &'static str,
    pub login_path: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub path: String,
}

// Current view of a login session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub role: Role,
    pub state: AuthState,
    pub phone_number: String,
}

// Request payload for phone number entry.
#[derive(Debug, Deserialize)]
pub struct PhoneRequest {
    pub phone_number: String,
}

// Response payload after requesting a code.
#[derive(Debug, Serialize)]
pub struct RequestCodeResponse {
    pub session_id: String,
    pub state: AuthState,
    pub directive: Directive,
}

// Request payload for code verification.
#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    pub code: String,
}

// Response payload for code verification.
#[derive(Debug, Serialize)]
pub struct VerifyCodeResponse {
    pub session_id: String,
    pub state: AuthState,
    pub authenticated: bool,
    pub directive: Directive,
}

#[derive(Debug, Serialize)]
pub struct AbandonResponse {
    pub abandoned: bool,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub role: Role,
    pub level: u32,
    pub heading: &'static str,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    pub product_id: Option<u64>,
}

// Checkout breakdown. Presentation formats the amounts as currency.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub product: Product,
    pub base_price: i64,
    pub commission_rate: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub payment_methods: Vec<PaymentMethod>,
    pub delivery_partner: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct PaymentMethodRequest {
    pub method: PaymentMethod,
}

#[derive(Debug, Serialize)]
pub struct PaymentMethodResponse {
    pub method: PaymentMethod,
    pub selected: bool,
}

// Request payload for the seller's "add product" form.
#[derive(Debug, Deserialize)]
pub struct ListingRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub draft: ProductDraft,
    pub persisted: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub product_id: u64,
    pub removed: bool,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
