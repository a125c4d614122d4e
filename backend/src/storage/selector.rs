use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::models::StorageStrategy;
use crate::storage::traits::TransactionStorage;

/// Hands out the backend for a requested [`StorageStrategy`].
///
/// Holds one in-memory store and, when Redis was reachable at startup, one
/// remote store. Requests for the remote backend fall back to memory when it
/// is absent.
#[derive(Clone)]
pub struct StoreSelector {
    memory: Arc<dyn TransactionStorage>,
    remote: Option<Arc<dyn TransactionStorage>>,
}

impl StoreSelector {
    pub fn new(
        memory: Arc<dyn TransactionStorage>,
        remote: Option<Arc<dyn TransactionStorage>>,
    ) -> Self {
        info!(
            "Store selector initialized - remote available: {}",
            remote.is_some()
        );
        Self { memory, remote }
    }

    pub fn get_store(&self, strategy: StorageStrategy) -> Arc<dyn TransactionStorage> {
        match (strategy, &self.remote) {
            (StorageStrategy::Remote, Some(remote)) => Arc::clone(remote),
            (StorageStrategy::Remote, None) => {
                warn!("Remote storage requested but not available, falling back to memory");
                Arc::clone(&self.memory)
            }
            (StorageStrategy::Memory, _) => Arc::clone(&self.memory),
        }
    }

    pub fn is_remote_available(&self) -> bool {
        self.remote.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestStores;

    #[test]
    fn test_memory_strategy_returns_memory_store() {
        let stores = TestStores::new();
        let store = stores.selector.get_store(StorageStrategy::Memory);
        assert_eq!(store.implementation_type(), StorageStrategy::Memory);
    }

    #[test]
    fn test_remote_strategy_returns_remote_store_when_available() {
        let stores = TestStores::new();
        assert!(stores.selector.is_remote_available());

        let store = stores.selector.get_store(StorageStrategy::Remote);
        assert_eq!(store.implementation_type(), StorageStrategy::Remote);
    }

    #[test]
    fn test_remote_strategy_falls_back_to_memory() {
        let (selector, memory) = TestStores::memory_only();
        assert!(!selector.is_remote_available());

        let store = selector.get_store(StorageStrategy::Remote);
        assert_eq!(store.implementation_type(), StorageStrategy::Memory);

        let expected: Arc<dyn TransactionStorage> = memory;
        assert!(Arc::ptr_eq(&store, &expected));
    }
}
