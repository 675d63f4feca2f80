mod account;
mod health;
mod middlewares;
mod swagger;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Assembles the full application router over the given state.
///
/// The security-headers layer sits outside the routes so that every
/// response, including 404/405 fallbacks, carries the fixed headers.
pub fn make_app(state: Arc<AppState>) -> Router {
    let force_https = state.config.force_https;
    let mut app = Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_checker_handler))
        .nest("/accounts", account::account_routes())
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(middleware::from_fn(middlewares::security_headers))
        .layer(TraceLayer::new_for_http());
    if force_https {
        app = app.layer(middleware::from_fn(middlewares::force_https_redirect));
    }
    app
}
