pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod models;
pub mod promo;
pub mod relay;
pub mod routes;
pub mod state;
pub mod submission;
pub mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::promo::PromoTrigger;
use crate::relay::{Relay, RelayError, ScriptRelay};
use crate::state::{AppState, SharedState};

/// Build the site with the sheet script relay from `config`.
pub fn build_app(config: Config) -> Result<Router, RelayError> {
    let relay = ScriptRelay::new(config.relay_url.clone(), config.relay_timeout)?;
    tracing::info!("Contact relay targets {}", relay.url());
    Ok(build_app_with_relay(config, Arc::new(relay)))
}

/// Build the site around any relay implementation.
pub fn build_app_with_relay(config: Config, relay: Arc<dyn Relay>) -> Router {
    let max_body_size = config.max_body_size;
    let static_dir = config.static_dir.clone();

    let state: SharedState = Arc::new(AppState {
        promo: PromoTrigger::new(config.modal_delay),
        config,
        relay,
    });

    // Security headers
    let headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", axum::routing::get(health))
        // Unknown paths render the home page.
        .fallback(views::pages::home)
        .layer(headers)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
