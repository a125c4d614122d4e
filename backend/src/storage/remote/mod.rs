//! Remote transaction backend over a Redis-style key-value store.
//!
//! Every transaction occupies three keys (see [`keys`]). Saves are three
//! independent writes: both index entries first, the primary record last.
//! A save that fails part way leaves at most dangling index members, which
//! the fan-out reads skip, and the record itself reads as absent.

pub mod client;
pub mod keys;
pub mod record;

use tracing::{debug, error, info};

use crate::domain::models::{StorageStrategy, Transaction, TransactionId};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::TransactionStorage;

pub use client::{KeyValueClient, RedisKeyValueClient};
pub use record::TransactionRecord;

pub struct RemoteTransactionStore<C: KeyValueClient = RedisKeyValueClient> {
    client: C,
}

impl<C: KeyValueClient> RemoteTransactionStore<C> {
    pub fn new(client: C) -> Self {
        info!("Initializing remote transaction store");
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Read an index set and resolve each member, skipping ids whose record
    /// no longer exists.
    fn resolve_index(&self, index_key: &str) -> StorageResult<Vec<Transaction>> {
        let members = self.client.smembers(index_key)?;
        debug!("Index {} holds {} ids", index_key, members.len());

        let mut transactions = Vec::with_capacity(members.len());
        for member in members {
            let id: TransactionId = member.parse().map_err(|_| StorageError::CorruptIndexEntry {
                key: index_key.to_string(),
                member: member.clone(),
            })?;
            match self.find_by_id(id)? {
                Some(transaction) => transactions.push(transaction),
                None => debug!("Skipping stale id {} in index {}", id, index_key),
            }
        }
        Ok(transactions)
    }

    fn write(&self, transaction: &Transaction) -> StorageResult<()> {
        let id = transaction.id().to_string();

        self.client
            .sadd(&keys::type_key(transaction.transaction_type()), &id)?;
        debug!(
            "Transaction {} indexed by type: {}",
            id,
            transaction.transaction_type()
        );

        if let Some(parent_id) = transaction.parent_id() {
            self.client.sadd(&keys::children_key(parent_id), &id)?;
            debug!("Transaction {} indexed as child of parent: {}", id, parent_id);
        }

        let key = keys::transaction_key(transaction.id());
        self.client.set(&key, &TransactionRecord::encode(transaction)?)?;
        debug!("Transaction record written under key: {}", key);
        Ok(())
    }
}

impl<C: KeyValueClient> TransactionStorage for RemoteTransactionStore<C> {
    fn save(&self, transaction: Transaction) -> StorageResult<Transaction> {
        debug!(
            "Saving transaction - id: {}, type: {}, amount: {}, parent_id: {:?}",
            transaction.id(),
            transaction.transaction_type(),
            transaction.amount(),
            transaction.parent_id()
        );

        if let Err(e) = self.write(&transaction) {
            error!("Error saving transaction {} to remote store: {}", transaction.id(), e);
            return Err(e);
        }

        info!(
            "Transaction saved to remote store - id: {}, type: {}",
            transaction.id(),
            transaction.transaction_type()
        );
        Ok(transaction)
    }

    fn find_by_id(&self, id: TransactionId) -> StorageResult<Option<Transaction>> {
        let key = keys::transaction_key(id);
        match self.client.get(&key)? {
            Some(json) => TransactionRecord::decode(&key, &json).map(Some),
            None => {
                debug!("Transaction not found in remote store - id: {}", id);
                Ok(None)
            }
        }
    }

    fn find_by_type(&self, transaction_type: &str) -> StorageResult<Vec<Transaction>> {
        let found = self.resolve_index(&keys::type_key(transaction_type))?;
        debug!("Retrieved {} transactions of type {}", found.len(), transaction_type);
        Ok(found)
    }

    fn find_children_of(&self, parent_id: TransactionId) -> StorageResult<Vec<Transaction>> {
        self.resolve_index(&keys::children_key(parent_id))
    }

    fn exists_by_id(&self, id: TransactionId) -> StorageResult<bool> {
        self.client.exists(&keys::transaction_key(id))
    }

    fn implementation_type(&self) -> StorageStrategy {
        StorageStrategy::Remote
    }
}
