//! Translation of domain failures into HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{FromRequest, FromRequestParts},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use crate::domain::models::UnknownStorageStrategy;
use crate::domain::TransactionError;
use shared::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    Domain(TransactionError),
    UnknownStrategy(UnknownStorageStrategy),
    /// Path, query or body could not be read into the expected shape
    MalformedRequest(String),
    /// The blocking task running the service call panicked or was cancelled
    Task(tokio::task::JoinError),
}

/// `axum::Json` whose rejection is reported as an [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejection is reported as an [`ApiError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` whose rejection is reported as an [`ApiError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<TransactionError> for ApiError {
    fn from(e: TransactionError) -> Self {
        ApiError::Domain(e)
    }
}

impl From<UnknownStorageStrategy> for ApiError {
    fn from(e: UnknownStorageStrategy) -> Self {
        ApiError::UnknownStrategy(e)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Task(e)
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Domain(TransactionError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            ApiError::Domain(TransactionError::DuplicateId(_)) => {
                (StatusCode::CONFLICT, "duplicate_id")
            }
            ApiError::Domain(TransactionError::ParentNotFound(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "parent_not_found")
            }
            ApiError::Domain(TransactionError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "transaction_not_found")
            }
            ApiError::Domain(TransactionError::SumOverflow(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "sum_overflow")
            }
            ApiError::Domain(TransactionError::Storage(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "storage_error")
            }
            ApiError::UnknownStrategy(_) => (StatusCode::BAD_REQUEST, "unknown_storage"),
            ApiError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Task(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Domain(e) => e.to_string(),
            ApiError::UnknownStrategy(e) => e.to_string(),
            ApiError::MalformedRequest(message) => message.clone(),
            ApiError::Task(_) => "Internal error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            error!("Request failed: {:?}", self);
        }
        let body = ErrorResponse {
            error: code.to_string(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
