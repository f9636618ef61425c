//! HTTP mapping of `StockError`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use serde_json::json;
use stock_common::StockError;

/// Handler error wrapping the workspace error type.
#[derive(Debug)]
pub struct ApiError(pub StockError);

impl From<StockError> for ApiError {
    fn from(err: StockError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    /// Response status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            StockError::NotFound(_) => StatusCode::NOT_FOUND,
            StockError::Upstream(_) | StockError::Parse { .. } => StatusCode::BAD_GATEWAY,
            StockError::Config(_) | StockError::Io(_) | StockError::SerdeJson(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}
