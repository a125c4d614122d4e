//! In-memory transaction backend.
//!
//! All data lives in process memory and is lost when the store is dropped.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::domain::models::{StorageStrategy, Transaction, TransactionId};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::TransactionStorage;

/// Primary table plus the two secondary indexes.
///
/// Not synchronized: mutation goes through `&mut self`, so callers sharing it
/// across threads must wrap it in a lock (see [`InMemoryTransactionStore`]).
#[derive(Debug, Default)]
pub struct TransactionIndexes {
    transactions: HashMap<TransactionId, Transaction>,
    by_type: HashMap<String, HashSet<TransactionId>>,
    children: HashMap<TransactionId, HashSet<TransactionId>>,
}

impl TransactionIndexes {
    pub fn insert(&mut self, transaction: Transaction) {
        let id = transaction.id();

        self.by_type
            .entry(transaction.transaction_type().to_string())
            .or_default()
            .insert(id);

        if let Some(parent_id) = transaction.parent_id() {
            self.children.entry(parent_id).or_default().insert(id);
        }

        // Upsert. A re-save under a different type or parent leaves the old
        // bucket entry in place.
        self.transactions.insert(id, transaction);
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(&id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.transactions.contains_key(&id)
    }

    pub fn of_type(&self, transaction_type: &str) -> Vec<Transaction> {
        self.resolve(self.by_type.get(transaction_type))
    }

    pub fn children_of(&self, parent_id: TransactionId) -> Vec<Transaction> {
        self.resolve(self.children.get(&parent_id))
    }

    fn resolve(&self, bucket: Option<&HashSet<TransactionId>>) -> Vec<Transaction> {
        bucket
            .into_iter()
            .flatten()
            .filter_map(|id| self.transactions.get(id).cloned())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }
}

/// Thread-safe in-memory backend: one lock around the indexes per instance.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    indexes: RwLock<TransactionIndexes>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions
    pub fn transaction_count(&self) -> StorageResult<usize> {
        Ok(self.read()?.count())
    }

    /// Number of distinct type labels indexed
    pub fn type_index_size(&self) -> StorageResult<usize> {
        Ok(self.read()?.by_type.len())
    }

    /// Number of transactions that have at least one child
    pub fn children_index_size(&self) -> StorageResult<usize> {
        Ok(self.read()?.children.len())
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, TransactionIndexes>> {
        self.indexes.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, TransactionIndexes>> {
        self.indexes.write().map_err(|_| StorageError::LockPoisoned)
    }
}

impl TransactionStorage for InMemoryTransactionStore {
    fn save(&self, transaction: Transaction) -> StorageResult<Transaction> {
        debug!(
            "Saving transaction - id: {}, type: {}, amount: {}, parent_id: {:?}",
            transaction.id(),
            transaction.transaction_type(),
            transaction.amount(),
            transaction.parent_id()
        );

        let mut indexes = self.write()?;
        indexes.insert(transaction.clone());

        info!(
            "Transaction saved - id: {}, total transactions: {}",
            transaction.id(),
            indexes.count()
        );
        Ok(transaction)
    }

    fn find_by_id(&self, id: TransactionId) -> StorageResult<Option<Transaction>> {
        let found = self.read()?.get(id).cloned();
        debug!("Lookup of transaction {} - found: {}", id, found.is_some());
        Ok(found)
    }

    fn find_by_type(&self, transaction_type: &str) -> StorageResult<Vec<Transaction>> {
        let found = self.read()?.of_type(transaction_type);
        debug!("Found {} transactions of type {}", found.len(), transaction_type);
        Ok(found)
    }

    fn find_children_of(&self, parent_id: TransactionId) -> StorageResult<Vec<Transaction>> {
        let found = self.read()?.children_of(parent_id);
        debug!("Found {} children of transaction {}", found.len(), parent_id);
        Ok(found)
    }

    fn exists_by_id(&self, id: TransactionId) -> StorageResult<bool> {
        Ok(self.read()?.contains(id))
    }

    fn implementation_type(&self) -> StorageStrategy {
        StorageStrategy::Memory
    }
}
