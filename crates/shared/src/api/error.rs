use std::{error::Error, fmt};

use http::StatusCode;
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    axum::{
        response::{IntoResponse, Response},
        Json,
    },
    tracing::{debug, error},
};

/// Error type for routes that have no typed errors of their own
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl Error for Nothing {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub error_messages: Vec<String>,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            error_messages: vec![message.into()],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_messages.join(", "))
    }
}

impl Error for ValidationError {}

/// Error returned from a route
///
/// `Inner` carries the route's own error enum (see `response_errors`), the
/// other variants cover failures any route can hit.
#[derive(Debug, Clone)]
pub enum ServerError<T> {
    Inner { code: StatusCode, inner: T },
    BadRequest { message: String },
    NotFound { message: String },
    Validation { inner: ValidationError },
    Other { message: String },
}

impl<T> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self {
            ServerError::Inner { code, .. } => *code,
            ServerError::BadRequest { .. } | ServerError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Inner { code, inner } => write!(f, "{code}: {inner:?}"),
            ServerError::BadRequest { message } => write!(f, "Bad request: {message}"),
            ServerError::NotFound { message } => write!(f, "Not found: {message}"),
            ServerError::Validation { inner } => write!(f, "Validation failed: {inner}"),
            ServerError::Other { message } => write!(f, "Something went wrong: {message}"),
        }
    }
}

impl<T: fmt::Debug> Error for ServerError<T> {}

impl<T> From<ValidationError> for ServerError<T> {
    fn from(inner: ValidationError) -> Self {
        ServerError::Validation { inner }
    }
}

#[cfg(feature = "backend")]
impl<T> From<rusqlite::Error> for ServerError<T> {
    fn from(err: rusqlite::Error) -> Self {
        ServerError::Other {
            message: format!("Sqlite error: {err}"),
        }
    }
}

#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

#[cfg(feature = "backend")]
impl<T: Serialize + fmt::Debug> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        let code = self.code();
        if code.is_server_error() {
            error!(%code, error = %self, "Request failed");
        } else {
            debug!(%code, error = %self, "Request rejected");
        }

        let body = match self {
            ServerError::Inner { inner, .. } => serde_json::json!({ "error": inner }),
            ServerError::Validation { inner } => serde_json::json!({ "error": inner }),
            ServerError::BadRequest { message }
            | ServerError::NotFound { message }
            | ServerError::Other { message } => serde_json::json!({ "error": message }),
        };

        (code, Json(body)).into_response()
    }
}
