use crate::frameworks::config::AppConfig;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use axum::Router;
use std::net::SocketAddr;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Build the router for a validated configuration.
pub fn build_app(config: &AppConfig) -> Router {
    let state = AppState::new(
        config.redirects.clone(),
        config.pricing,
        config.accepted_code.clone(),
        config.level,
        config.session_idle_ttl_seconds,
    );
    app(state)
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return;
        }
    };
    tracing::debug!(
        commission_rate = config.pricing.commission_rate,
        delivery_fee = config.pricing.delivery_fee,
        session_idle_ttl_seconds = config.session_idle_ttl_seconds,
        buyer_redirect = %config.redirects.buyer,
        seller_redirect = %config.redirects.seller,
        "configuration loaded"
    );

    let app = build_app(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return;
        }
    };
    tracing::info!(%addr, "listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
