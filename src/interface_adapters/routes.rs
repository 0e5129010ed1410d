use crate::interface_adapters::handlers::{
    abandon_login, checkout, enter_phone, get_session, home, navigate, payment_method,
    product_details, remove_product, request_code, roles, start_login, submit_product,
    verify_code,
};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/roles", get(roles))
        .route("/navigate", get(navigate))
        .route("/auth/{role}/sessions", post(start_login))
        .route(
            "/auth/sessions/{session_id}",
            get(get_session).delete(abandon_login),
        )
        .route("/auth/sessions/{session_id}/phone", put(enter_phone))
        .route("/auth/sessions/{session_id}/code", post(request_code))
        .route("/auth/sessions/{session_id}/verify", post(verify_code))
        .route("/{role}/home", get(home))
        .route("/products", post(submit_product))
        .route(
            "/products/{product_id}",
            get(product_details).delete(remove_product),
        )
        .route("/checkout", get(checkout))
        .route("/checkout/payment-method", post(payment_method))
        .with_state(state)
}
