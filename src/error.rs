//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Every error is converted at the handler boundary into the
//! uniform `{"success": false, "message": ...}` JSON envelope the API
//! contract requires.
//!
//! Failures are served with HTTP 200 like every other response; the
//! `success` field in the body is the only failure signal. `AppError`
//! implements `actix_web::error::ResponseError` accordingly.
//!
//! Storage and other unexpected internal failures are logged with their full
//! detail but reach the caller only as a generic message.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input.
    Validation(String),
    /// Uniqueness violation, e.g. registering an existing username.
    Conflict(String),
    /// The request carried no identity where one is required.
    AuthRequired(String),
    /// Unknown user or task id.
    NotFound(String),
    /// An error originating from the storage layer.
    Database(String),
    /// Any other unexpected server-side failure.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::AuthRequired(msg) => write!(f, "Auth Required: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    // The compatibility contract signals failure in the body, never in the
    // HTTP status.
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::AuthRequired(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::Database(_) | AppError::Internal(_) => {
                log::error!("{}", self);
                "internal error, please try again later".to_string()
            }
        };

        HttpResponse::Ok().json(json!({
            "success": false,
            "message": message
        }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` maps to `NotFound`; everything else is a storage failure
/// whose detail stays server-side.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("record not found".into()),
            _ => AppError::Database(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}
