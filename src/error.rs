use std::{collections::BTreeMap, error::Error, fmt::Debug};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use diesel::result::Error as DieselError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{response::{Envelope, ErrorDetail}, utils::{error_fmt_chain, PoolGetError}};

// Every failure of the api, rendered as a 400 envelope
#[derive(Error)]
pub enum ApiError{
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed")]
    ValidationFailed(BTreeMap<String, String>),
    #[error("{message}")]
    ConstraintViolation{
        message: String,
        #[source]
        source: DieselError
    },
    #[error("Unexpected error occured")]
    Unexpected(#[from] anyhow::Error)
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        ApiError::ValidationFailed(BTreeMap::from([(field.to_string(), message.into())]))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::ValidationFailed(_) => "validation_failed",
            ApiError::ConstraintViolation{..} => "constraint_violation",
            ApiError::Unexpected(_) => "unexpected"
        }
    }

    // First message, used as the envelope msg
    fn first_message(&self) -> String {
        match self {
            ApiError::ValidationFailed(fields) => fields.values()
                .next()
                .cloned()
                .unwrap_or_default(),
            other => other.to_string()
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            ApiError::ValidationFailed(fields) => ErrorDetail::Fields(fields.clone()),
            other => ErrorDetail::Message(other.to_string())
        }
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ValidationFailed(fields) => write!(f, "{}: {:?}", self, fields),
            _ => {
                write!(f, "{}", self)?;
                error_fmt_chain(f, &self.source())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        tracing::error!(error.kind = self.kind(), error.cause_chain = ?self, "Request failed");

        Envelope::<()>::failure(self.detail(), self.first_message())
            .respond(self.status_code())
    }
}

impl From<DieselError> for ApiError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::DatabaseError(kind, info) => ApiError::ConstraintViolation{
                message: info.message().to_string(),
                source: DieselError::DatabaseError(kind, info)
            },
            DieselError::NotFound => ApiError::NotFound("record not found".to_string()),
            other => ApiError::Unexpected(anyhow::Error::new(other).context("Failed to run query"))
        }
    }
}

impl From<PoolGetError> for ApiError {
    fn from(e: PoolGetError) -> Self {
        ApiError::Unexpected(anyhow::Error::new(e))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::ValidationFailed(field_messages(&errors))
    }
}

// First message of every failing field
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors.field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|e| {
                let message = e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
        })
        .collect()
}

// Several validation passes over one request body reported together
pub fn collect_validation(
    results: impl IntoIterator<Item = Result<(), ValidationErrors>>
) -> Result<(), ApiError> {
    let fields: BTreeMap<String, String> = results.into_iter()
        .filter_map(Result::err)
        .flat_map(|errors| field_messages(&errors))
        .collect();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ApiError::ValidationFailed(fields))
    }
}
