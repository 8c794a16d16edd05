//! HTTP error mapping

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_common::{ComparisonError, ErrorKind, EstimateError, PulseError};
use tracing::{error, warn};

/// Error returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// Planner rejected the request or failed
    Pulse(PulseError),
    /// Body or query string could not be decoded
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Pulse(e) if e.kind().is_none() => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Error taxonomy entry, `None` for internal failures
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ApiError::Pulse(e) => e.kind(),
            ApiError::Malformed(_) => Some(ErrorKind::InvalidInput),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Pulse(e) => e.to_string(),
            ApiError::Malformed(m) => m.clone(),
        };

        if status.is_server_error() {
            error!(%message, "Request failed");
        } else {
            warn!(%message, "Request rejected");
        }

        let code = match self.kind() {
            Some(kind) => serde_json::json!(kind),
            None => serde_json::json!("internal"),
        };
        let body = Json(serde_json::json!({
            "error": code,
            "message": message,
        }));
        (status, body).into_response()
    }
}

impl From<PulseError> for ApiError {
    fn from(err: PulseError) -> Self {
        ApiError::Pulse(err)
    }
}

impl From<EstimateError> for ApiError {
    fn from(err: EstimateError) -> Self {
        ApiError::Pulse(err.into())
    }
}

impl From<ComparisonError> for ApiError {
    fn from(err: ComparisonError) -> Self {
        ApiError::Pulse(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}
