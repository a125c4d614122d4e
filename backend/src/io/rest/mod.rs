//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api/v1/transactionservice`. Every endpoint takes an
//! optional `storage` query parameter (`memory` by default, or `remote`).
//! The domain service is synchronous, so handlers run it on tokio's blocking
//! pool.

pub mod error;
pub mod mappers;
pub mod transaction_apis;

pub use error::ApiError;
pub use transaction_apis::*;
