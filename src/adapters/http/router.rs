//! Assembles the full application router with its middleware stack.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::chat::{chat_routes, ChatHandlers};
use super::health::health_routes;
use super::history::{history_routes, HistoryHandlers};

/// Middleware settings for [`app_router`].
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub request_timeout: Duration,
    /// Allowed origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(120),
            cors_origins: Vec::new(),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allow_origin)
}

/// Every endpoint plus trace, CORS and timeout layers.
pub fn app_router(
    chat: ChatHandlers,
    history: HistoryHandlers,
    settings: &RouterSettings,
) -> Router {
    Router::new()
        .merge(chat_routes(chat))
        .merge(history_routes(history))
        .merge(health_routes())
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}
