pub mod storage_strategy;
pub mod transaction;

pub use storage_strategy::{StorageStrategy, UnknownStorageStrategy};
pub use transaction::{Transaction, TransactionId, ValidationError};
