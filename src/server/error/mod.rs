//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every failure is classified in this order:
//!
//! 1. Unmatched route → 404 `invalid path` (raised by the router fallback as `NotFound`)
//! 2. Domain errors (`NotFound`, `BadRequest`) → their own status and message
//! 3. Database errors signalling malformed input (`22P02`) or unparseable identifiers → 400
//! 4. Everything else → 500 with a generic message, full error logged server-side

pub mod config;
pub mod parse;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, parse::ParseError},
};

/// Message returned for every 400 caused by a malformed identifier.
pub const BAD_REQUEST_MSG: &str = "Bad request";

/// Message returned when a vote delta is missing, not an integer, or out of range.
pub const INVALID_DATA_TYPE_MSG: &str = "Invalid data type";

/// Message returned for requests that match no route.
pub const INVALID_PATH_MSG: &str = "invalid path";

/// Message returned for every 500.
pub const INTERNAL_SERVER_ERROR_MSG: &str = "internal server error";

/// PostgreSQL SQLSTATE for `invalid_text_representation`, e.g. `'bananas'::integer`.
const PG_INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure variants use `#[from]` for
/// automatic error conversion while the domain variants carry the message sent to the
/// client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 400 Bad Request when the driver reports malformed input,
    /// otherwise 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Client-supplied identifier could not be parsed.
    ///
    /// Results in 400 Bad Request with a fixed message.
    #[error(transparent)]
    ParseErr(#[from] ParseError),

    /// I/O error, e.g. failing to bind the listening socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Returns true when the database rejected a parameter because its text could not be
/// converted to the column type.
fn is_invalid_input_syntax(err: &DbErr) -> bool {
    let runtime_err = match err {
        DbErr::Query(runtime_err) | DbErr::Exec(runtime_err) => runtime_err,
        _ => return false,
    };

    match runtime_err {
        RuntimeErr::SqlxError(sqlx_err) => sqlx_err
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .is_some_and(|code| code == PG_INVALID_TEXT_REPRESENTATION),
        _ => false,
    }
}

fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(ErrorDto { msg: msg.into() })).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `ParseErr`, and malformed-input `DbErr`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::ParseErr(err) => {
                tracing::debug!("{}", err);
                error_response(StatusCode::BAD_REQUEST, BAD_REQUEST_MSG)
            }
            Self::DbErr(err) if is_invalid_input_syntax(&err) => {
                tracing::debug!("Rejected malformed input: {}", err);
                error_response(StatusCode::BAD_REQUEST, BAD_REQUEST_MSG)
            }
            err @ (Self::DbErr(_) | Self::ConfigErr(_) | Self::IoErr(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MSG)
    }
}
