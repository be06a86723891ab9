//! Route-boundary error type.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl is
//! the single place where domain failures turn into a status code and a
//! `{"error": ...}` body. Internal detail stays in the server logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::jwt::TokenError;
use crate::auth::password::PasswordError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("User already exists")]
    DuplicateEmail,

    /// Covers both unknown email and wrong password. The two causes are
    /// deliberately indistinguishable to the client; logs tell them apart.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing Authorization header")]
    MissingAuth,

    #[error("Invalid Authorization header")]
    MalformedAuth,

    #[error("Invalid or expired token")]
    InvalidToken(#[from] TokenError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::MissingAuth
            | Self::MalformedAuth
            | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Password(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "internal error");
            "Internal server error".to_string()
        } else {
            if status == StatusCode::UNAUTHORIZED {
                warn!(error = %self, "request rejected");
            }
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
