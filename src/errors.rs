use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Every way a game request can fail. Converted into an HTTP response in exactly one place, the
/// `IntoResponse` implementation below.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::NotFound(_) => ErrorCode::NotFound,
            GameError::Validation(_) => ErrorCode::Validation,
            GameError::Conflict(_) => ErrorCode::Conflict,
            GameError::Unauthorized(_) => ErrorCode::Unauthorized,
            GameError::Internal(_) => ErrorCode::Internal,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            GameError::NotFound(_) => StatusCode::NOT_FOUND,
            GameError::Validation(_) => StatusCode::BAD_REQUEST,
            GameError::Conflict(_) => StatusCode::CONFLICT,
            GameError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed.");
        }
        let body = ErrorResponse {
            error: true,
            error_code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: bool,
    pub error_code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Conflict,
    Unauthorized,
    Internal,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("the catalog holds no tasks")]
    Empty,

    #[error("task #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("task `{name}` appears more than once")]
    DuplicateName { name: String },

    #[error("task `{name}` has latitude {latitude}, expected a value in [-90, 90]")]
    LatitudeOutOfRange { name: String, latitude: f64 },

    #[error("task `{name}` has longitude {longitude}, expected a value in [-180, 180]")]
    LongitudeOutOfRange { name: String, longitude: f64 },

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} of `{path}` is not a valid task: {source}")]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("failed to load the task catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid JWT signing key: {0}")]
    SigningKey(String),

    #[error("failed to serve HTTP on the listen address: {0}")]
    Io(#[from] std::io::Error),
}
