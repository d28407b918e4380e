use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use crate::HarvestError;

impl IntoResponse for HarvestError {
    fn into_response(self) -> Response {
        match &self {
            HarvestError::StartPage { url, .. } => {
                tracing::error!(url = %url, error = %self, "Crawl failed on start page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch start url").into_response()
            }
            _ => {
                tracing::error!(error = %self, "Crawl failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}

/// Converts a handler panic into a generic 500 so the service keeps running
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
}
