//! # Storage Traits
//!
//! The contract every transaction backend satisfies, so the domain layer can
//! work against process-local maps or a remote key-value store without
//! modification.

use crate::domain::models::{StorageStrategy, Transaction, TransactionId};
use crate::storage::error::StorageResult;

/// Uniform interface for transaction persistence.
///
/// Operations are synchronous. Lookups that return several records make no
/// ordering guarantee.
pub trait TransactionStorage: Send + Sync {
    /// Persist a transaction and update the secondary indexes
    fn save(&self, transaction: Transaction) -> StorageResult<Transaction>;

    /// Retrieve a transaction by id
    fn find_by_id(&self, id: TransactionId) -> StorageResult<Option<Transaction>>;

    /// All transactions carrying the given type label, possibly none
    fn find_by_type(&self, transaction_type: &str) -> StorageResult<Vec<Transaction>>;

    /// Direct children of the given transaction, one level only
    fn find_children_of(&self, parent_id: TransactionId) -> StorageResult<Vec<Transaction>>;

    /// Whether a transaction with this id has been saved
    fn exists_by_id(&self, id: TransactionId) -> StorageResult<bool>;

    /// Which kind of backend this is
    fn implementation_type(&self) -> StorageStrategy;
}
