use crate::domain::entities::Product;
use crate::domain::errors::{AuthError, CatalogError};
use crate::domain::navigation::{resolve, Route};
use crate::domain::role::Role;
use crate::interface_adapters::protocol::{
    AbandonResponse, CheckoutQuery, CheckoutResponse, DeleteProductResponse, ErrorResponse,
    HomeResponse, ListingRequest, ListingResponse, NavigateQuery, PaymentMethodRequest,
    PaymentMethodResponse, PhoneRequest, RequestCodeResponse, RoleEntry, SessionResponse,
    VerifyCodeRequest, VerifyCodeResponse,
};
use crate::interface_adapters::state::{
    AppState, ConstantLevelProvider, InMemorySessionStore, PlaceholderCatalog,
    SentinelCodeVerifier, SystemClock,
};
use crate::use_cases::abandon_login::AbandonLoginUseCase;
use crate::use_cases::checkout::{select_payment_method, QuoteCheckoutUseCase};
use crate::use_cases::enter_phone::EnterPhoneUseCase;
use crate::use_cases::fetch_session;
use crate::use_cases::home::{HomeUseCase, ProductDetailsUseCase};
use crate::use_cases::request_code::RequestCodeUseCase;
use crate::use_cases::seller_products::{delete_product, submit_listing, ListingInput};
use crate::use_cases::start_login::StartLoginUseCase;
use crate::use_cases::submit_code::SubmitCodeUseCase;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn session_store(state: &AppState) -> InMemorySessionStore<SystemClock> {
    InMemorySessionStore {
        sessions: state.sessions.clone(),
        clock: SystemClock,
        idle_ttl_seconds: state.session_idle_ttl_seconds,
    }
}

// Handler for the role-selection entry screen.
pub async fn roles() -> Json<Vec<RoleEntry>> {
    Json(
        Role::ALL
            .into_iter()
            .map(|role| RoleEntry {
                role,
                title: role.title(),
                login_path: role.login_path(),
            })
            .collect(),
    )
}

pub async fn navigate(Query(query): Query<NavigateQuery>) -> Json<Route> {
    Json(resolve(&query.path))
}

// Handler for entering a role's login screen.
pub async fn start_login(
    State(state): State<AppState>,
    Path(role): Path<Role>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let use_case = StartLoginUseCase {
        store: session_store(&state),
    };

    let result = use_case.execute(role).await.map_err(map_auth_error)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: result.session_id,
            role: result.session.role,
            state: result.session.state(),
            phone_number: result.session.phone_number,
        }),
    ))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = fetch_session(&session_store(&state), &session_id)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(SessionResponse {
        session_id,
        role: session.role,
        state: session.state(),
        phone_number: session.phone_number,
    }))
}

pub async fn enter_phone(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(payload): Json<PhoneRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let use_case = EnterPhoneUseCase {
        store: session_store(&state),
    };

    let session = use_case
        .execute(&session_id, payload.phone_number)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(SessionResponse {
        session_id,
        role: session.role,
        state: session.state(),
        phone_number: session.phone_number,
    }))
}

// Handler for the "Send OTP" action.
pub async fn request_code(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<RequestCodeResponse>, ApiError> {
    let use_case = RequestCodeUseCase {
        store: session_store(&state),
        redirects: state.redirects.clone(),
    };

    let transition = use_case
        .execute(&session_id)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(RequestCodeResponse {
        session_id,
        state: transition.session.state(),
        directive: transition.directive,
    }))
}

// Handler for the "Verify OTP" action. A wrong code is a normal 200 result.
pub async fn verify_code(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(payload): Json<VerifyCodeRequest>,
) -> Result<Json<VerifyCodeResponse>, ApiError> {
    let use_case = SubmitCodeUseCase {
        verifier: SentinelCodeVerifier {
            accepted_code: state.accepted_code.clone(),
        },
        store: session_store(&state),
        redirects: state.redirects.clone(),
    };

    let transition = use_case
        .execute(&session_id, &payload.code)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(VerifyCodeResponse {
        session_id,
        state: transition.session.state(),
        authenticated: transition.is_authenticated(),
        directive: transition.directive,
    }))
}

pub async fn abandon_login(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<AbandonResponse>, ApiError> {
    let use_case = AbandonLoginUseCase {
        store: session_store(&state),
    };

    let result = use_case
        .execute(&session_id)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(AbandonResponse {
        abandoned: result.abandoned,
    }))
}

pub async fn home(State(state): State<AppState>, Path(role): Path<Role>) -> Json<HomeResponse> {
    let use_case = HomeUseCase {
        levels: ConstantLevelProvider(state.level),
        catalog: PlaceholderCatalog,
    };

    let view = use_case.execute(role);

    Json(HomeResponse {
        role,
        level: view.level,
        heading: view.heading,
        products: view.products,
    })
}

pub async fn product_details(Path(product_id): Path<u64>) -> Result<Json<Product>, ApiError> {
    let use_case = ProductDetailsUseCase {
        catalog: PlaceholderCatalog,
    };

    let product = use_case.execute(product_id).map_err(map_catalog_error)?;

    Ok(Json(product))
}

// Handler for the checkout screen; the quote is computed on every call.
pub async fn checkout(
    State(state): State<AppState>,
    Query(query): Query<CheckoutQuery>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let use_case = QuoteCheckoutUseCase {
        catalog: PlaceholderCatalog,
        pricing: state.pricing,
    };
    let product_id = query.product_id.unwrap_or(PLACEHOLDER_PRODUCT_ID);

    let view = use_case.execute(product_id).map_err(map_catalog_error)?;

    Ok(Json(CheckoutResponse {
        base_price: view.quote.base_price(),
        commission_rate: view.quote.commission_rate(),
        delivery_fee: view.quote.delivery_fee(),
        total: view.quote.total(),
        product: view.product,
        payment_methods: view.payment_methods,
        delivery_partner: view.delivery_partner,
    }))
}

// Checkout links straight to the only product when no id is given.
const PLACEHOLDER_PRODUCT_ID: u64 = 1;

pub async fn payment_method(
    Json(payload): Json<PaymentMethodRequest>,
) -> Json<PaymentMethodResponse> {
    Json(PaymentMethodResponse {
        method: select_payment_method(payload.method),
        selected: false,
    })
}

pub async fn submit_product(
    Json(payload): Json<ListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), ApiError> {
    let draft = submit_listing(ListingInput {
        name: payload.name,
        description: payload.description,
        price: payload.price,
    })
    .map_err(map_catalog_error)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ListingResponse {
            draft,
            persisted: false,
        }),
    ))
}

pub async fn remove_product(Path(product_id): Path<u64>) -> Json<DeleteProductResponse> {
    Json(DeleteProductResponse {
        product_id,
        removed: delete_product(product_id),
    })
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_auth_error(err: AuthError) -> ApiError {
    match err {
        AuthError::SessionNotFound => {
            error_response(StatusCode::NOT_FOUND, "login session not found")
        }
        AuthError::CodeNotRequested => {
            error_response(StatusCode::CONFLICT, "code has not been requested")
        }
        AuthError::AlreadyVerified => {
            error_response(StatusCode::CONFLICT, "session is already verified")
        }
        AuthError::StorageFailure => {
            warn!("session storage failure");
            error_response(StatusCode::BAD_GATEWAY, "storage error")
        }
    }
}

fn map_catalog_error(err: CatalogError) -> ApiError {
    match err {
        CatalogError::ProductNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "product not found")
        }
        CatalogError::InvalidListing(message) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, message)
        }
        CatalogError::Pricing(err) => {
            warn!(error = %err, "checkout pricing rejected");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}
