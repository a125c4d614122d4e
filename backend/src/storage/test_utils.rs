//! Test helpers shared by the storage, domain and REST tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::remote::{KeyValueClient, RemoteTransactionStore};
use crate::storage::{InMemoryTransactionStore, StoreSelector, TransactionStorage};

/// Process-local stand-in for a Redis server.
///
/// `fail_after(n)` lets the next `n` operations succeed and fails every one
/// after that until `recover()` is called.
pub struct InProcessKeyValue {
    values: Mutex<HashMap<String, String>>,
    sets: Mutex<HashMap<String, HashSet<String>>>,
    remaining_before_failure: AtomicI64,
}

impl InProcessKeyValue {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            sets: Mutex::new(HashMap::new()),
            remaining_before_failure: AtomicI64::new(-1),
        }
    }

    pub fn fail_after(&self, successful_ops: i64) {
        self.remaining_before_failure
            .store(successful_ops, Ordering::SeqCst);
    }

    pub fn recover(&self) {
        self.remaining_before_failure.store(-1, Ordering::SeqCst);
    }

    /// Remove a key behind the store's back
    pub fn delete(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Members of a set, sorted
    pub fn members(&self, set: &str) -> Vec<String> {
        let mut members: Vec<String> = self
            .sets
            .lock()
            .unwrap()
            .get(set)
            .map(|m| m.iter().cloned().collect())
            .unwrap_or_default();
        members.sort();
        members
    }

    fn check_available(&self) -> StorageResult<()> {
        let remaining = self.remaining_before_failure.load(Ordering::SeqCst);
        if remaining < 0 {
            return Ok(());
        }
        if remaining == 0 {
            return Err(StorageError::Remote(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "connection refused",
            ))));
        }
        self.remaining_before_failure
            .store(remaining - 1, Ordering::SeqCst);
        Ok(())
    }
}

impl KeyValueClient for InProcessKeyValue {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_available()?;
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.check_available()?;
        Ok(self.value(key))
    }

    fn sadd(&self, set: &str, member: &str) -> StorageResult<()> {
        self.check_available()?;
        self.sets
            .lock()
            .unwrap()
            .entry(set.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    fn smembers(&self, set: &str) -> StorageResult<HashSet<String>> {
        self.check_available()?;
        Ok(self.members(set).into_iter().collect())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        self.check_available()?;
        Ok(self.values.lock().unwrap().contains_key(key))
    }
}

/// Selector with both backends present, plus handles to inspect them
pub struct TestStores {
    pub selector: StoreSelector,
    pub memory: Arc<InMemoryTransactionStore>,
    pub remote: Arc<RemoteTransactionStore<InProcessKeyValue>>,
}

impl TestStores {
    pub fn new() -> Self {
        let memory = Arc::new(InMemoryTransactionStore::new());
        let remote = Arc::new(RemoteTransactionStore::new(InProcessKeyValue::new()));
        let remote_store: Arc<dyn TransactionStorage> = remote.clone();
        let selector = StoreSelector::new(memory.clone(), Some(remote_store));
        Self {
            selector,
            memory,
            remote,
        }
    }

    /// Selector configured as if Redis were unreachable at startup
    pub fn memory_only() -> (StoreSelector, Arc<InMemoryTransactionStore>) {
        let memory = Arc::new(InMemoryTransactionStore::new());
        (StoreSelector::new(memory.clone(), None), memory)
    }
}
