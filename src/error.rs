use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Errors surfaced at the HTTP edge. Bodies are fixed strings; causes stay in the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("malformed request")]
    MalformedRequest,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest => "bad request",
            ApiError::InvalidCredentials => "invalid email or password",
            ApiError::Unauthorized => "unauthorized",
            ApiError::NotFound => "not found",
            ApiError::Internal(_) => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!(error = %e, "internal error");
        }
        (self.status(), self.body()).into_response()
    }
}

/// Decodes a JSON request body, mapping any parse failure to `MalformedRequest`.
pub fn parse_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "failed to parse request JSON");
        ApiError::MalformedRequest
    })
}
