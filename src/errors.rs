use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    DatabaseError(String),

    #[error("{0}")]
    InternalError(String),
}

/// Error body shape returned on every failure path.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Store and internal failures are logged with detail but answered
        // with a generic message.
        let error = match self {
            AppError::DatabaseError(detail) | AppError::InternalError(detail) => {
                log::error!("internal error: {}", detail);
                "An unexpected error occurred.".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        if let ErrorKind::Write(WriteFailure::WriteError(write_err)) = &*err.kind {
            if write_err.code == 11000 {
                return AppError::ValidationError(duplicate_key_message(&write_err.message));
            }
        }

        AppError::DatabaseError(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join("; "))
    }
}

/// Normalizes a Mongo duplicate-key message (code 11000) into a single
/// readable string naming the offending index field.
fn duplicate_key_message(raw: &str) -> String {
    let field = raw
        .split("index: ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .map(|index_name| index_name.trim_end_matches("_1"))
        .unwrap_or("unknown");

    format!("Duplicate value for field(s): {}", field)
}

pub type AppResult<T> = Result<T, AppError>;
