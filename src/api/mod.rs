//! HTTP API server

use std::any::Any;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Body returned for requests that match no route
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Body returned when a handler fails or panics
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/albums", get(handlers::list_albums))
        .route("/health", get(handlers::health))
        .with_state(state);

    with_defaults(routes)
}

/// Attach the not-found fallback, panic recovery and request tracing to a
/// route table.
pub fn with_defaults(router: Router) -> Router {
    router.fallback(handlers::not_found).layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http()),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}
