//! # Storage Module
//!
//! Data persistence for the ledger.
//!
//! - **traits**: the [`TransactionStorage`] contract shared by all backends
//! - **memory**: process-local maps with type and children indexes
//! - **remote**: a thin client over a Redis-style key-value primitive
//! - **selector**: picks a backend per request, falling back to memory when
//!   the remote backend is unavailable

pub mod error;
pub mod memory;
pub mod remote;
pub mod selector;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use error::{StorageError, StorageResult};
pub use memory::InMemoryTransactionStore;
pub use remote::{KeyValueClient, RedisKeyValueClient, RemoteTransactionStore};
pub use selector::StoreSelector;
pub use traits::TransactionStorage;
