use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use citynav_core::RouteError;
use thiserror::Error;

/// Errors returned by the JSON endpoints that report failures explicitly.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("node '{0}' not found")]
    NodeNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Route(RouteError::UnknownNode { .. }) | ApiError::NodeNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Route(RouteError::Unreachable { .. }) => StatusCode::NOT_FOUND,
            ApiError::Route(RouteError::LimitExceeded { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
