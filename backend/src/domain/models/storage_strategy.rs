use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which backend a caller wants a request served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageStrategy {
    /// Process-local maps; the default when a caller names no strategy
    #[default]
    Memory,
    /// Remote key-value store (Redis)
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown storage strategy: {0}")]
pub struct UnknownStorageStrategy(pub String);

impl StorageStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageStrategy::Memory => "memory",
            StorageStrategy::Remote => "remote",
        }
    }
}

impl fmt::Display for StorageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageStrategy {
    type Err = UnknownStorageStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageStrategy::Memory),
            // "redis" was the wire value of earlier clients
            "remote" | "redis" => Ok(StorageStrategy::Remote),
            _ => Err(UnknownStorageStrategy(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("MEMORY".parse::<StorageStrategy>(), Ok(StorageStrategy::Memory));
        assert_eq!("Remote".parse::<StorageStrategy>(), Ok(StorageStrategy::Remote));
        assert_eq!("redis".parse::<StorageStrategy>(), Ok(StorageStrategy::Remote));
    }

    #[test]
    fn test_unknown_strategy_is_an_error() {
        let err = "postgres".parse::<StorageStrategy>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown storage strategy: postgres");
    }

    #[test]
    fn test_default_is_memory() {
        assert_eq!(StorageStrategy::default(), StorageStrategy::Memory);
        assert_eq!(StorageStrategy::default().as_str(), "memory");
    }
}
