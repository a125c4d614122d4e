//! # Domain Module
//!
//! Business logic of the ledger: the immutable [`models::Transaction`], the
//! storage strategy a caller selects, and the [`TransactionService`] that
//! validates creations, looks transactions up by type and sums subtrees.
//!
//! The domain works against the [`crate::storage::TransactionStorage`]
//! contract only and never knows which backend served a call.

pub mod commands;
pub mod errors;
pub mod models;
pub mod transaction_service;

pub use commands::transactions::CreateTransactionCommand;
pub use errors::TransactionError;
pub use transaction_service::TransactionService;
