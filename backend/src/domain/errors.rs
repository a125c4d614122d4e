use thiserror::Error;

use crate::domain::models::{TransactionId, ValidationError};
use crate::storage::StorageError;

/// Failures reported by [`crate::domain::TransactionService`]
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Transaction with id {0} already exists")]
    DuplicateId(TransactionId),
    #[error("Parent transaction {0} does not exist")]
    ParentNotFound(TransactionId),
    #[error("Transaction {0} not found")]
    NotFound(TransactionId),
    #[error("Sum of the subtree under transaction {0} exceeds the representable amount range")]
    SumOverflow(TransactionId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
