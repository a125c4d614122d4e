//! The key-value primitive the remote backend is built on.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use redis::Commands;
use tracing::info;

use crate::config::RedisConfig;
use crate::storage::error::{StorageError, StorageResult};

/// The five operations the remote store is allowed to use.
///
/// Each call is assumed atomic on its own; nothing spans several keys.
pub trait KeyValueClient: Send + Sync {
    /// `SET key value`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// `GET key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// `SADD set member`
    fn sadd(&self, set: &str, member: &str) -> StorageResult<()>;

    /// `SMEMBERS set`
    fn smembers(&self, set: &str) -> StorageResult<HashSet<String>>;

    /// `EXISTS key`
    fn exists(&self, key: &str) -> StorageResult<bool>;
}

/// [`KeyValueClient`] over a single synchronous Redis connection
pub struct RedisKeyValueClient {
    connection: Mutex<redis::Connection>,
}

impl RedisKeyValueClient {
    /// Open a connection, failing fast if the server is unreachable
    pub fn connect(config: &RedisConfig) -> StorageResult<Self> {
        info!("Connecting to Redis at {}", config.url);

        let client = redis::Client::open(config.url.as_str())?;
        let connection =
            client.get_connection_with_timeout(Duration::from_millis(config.connect_timeout_ms))?;
        let io_timeout = Some(Duration::from_millis(config.io_timeout_ms));
        connection.set_read_timeout(io_timeout)?;
        connection.set_write_timeout(io_timeout)?;

        info!("Redis connection established");
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn with_connection<T>(
        &self,
        op: impl FnOnce(&mut redis::Connection) -> redis::RedisResult<T>,
    ) -> StorageResult<T> {
        let mut connection = self
            .connection
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(op(&mut *connection)?)
    }
}

impl KeyValueClient for RedisKeyValueClient {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.with_connection(|con| con.set(key, value))
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.with_connection(|con| con.get(key))
    }

    fn sadd(&self, set: &str, member: &str) -> StorageResult<()> {
        self.with_connection(|con| con.sadd(set, member))
    }

    fn smembers(&self, set: &str) -> StorageResult<HashSet<String>> {
        self.with_connection(|con| con.smembers(set))
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        self.with_connection(|con| con.exists(key))
    }
}
