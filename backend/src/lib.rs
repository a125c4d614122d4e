//! # Transaction Ledger Backend
//!
//! Records immutable monetary transactions that may name a parent, forming a
//! forest, and sums the subtree under any transaction. Storage is pluggable
//! per request: process-local maps or a remote Redis store, with fallback to
//! memory when Redis is unavailable.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (TransactionService, models)
//!     ↓
//! Storage Layer (StoreSelector → in-memory | remote)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::domain::TransactionService;
use crate::storage::{
    InMemoryTransactionStore, RedisKeyValueClient, RemoteTransactionStore, StoreSelector,
    TransactionStorage,
};

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService,
}

/// Wire the stores and services.
///
/// Blocks while connecting to Redis. An unreachable Redis is not fatal: the
/// remote backend is left out and remote requests fall back to memory.
pub fn initialize_backend(config: &ServerConfig) -> AppState {
    info!("Setting up storage");
    let memory: Arc<dyn TransactionStorage> = Arc::new(InMemoryTransactionStore::new());

    let remote: Option<Arc<dyn TransactionStorage>> = if config.redis.enabled {
        match RedisKeyValueClient::connect(&config.redis) {
            Ok(client) => {
                let remote: Arc<dyn TransactionStorage> =
                    Arc::new(RemoteTransactionStore::new(client));
                Some(remote)
            }
            Err(e) => {
                warn!("Redis unavailable at {}: {}. Remote storage disabled", config.redis.url, e);
                None
            }
        }
    } else {
        info!("Redis disabled by configuration");
        None
    };

    info!("Setting up domain model");
    let transaction_service = TransactionService::new(StoreSelector::new(memory, remote));

    AppState {
        transaction_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/transaction/:transaction_id", put(io::create_transaction))
        .route("/types/:transaction_type", get(io::get_transactions_by_type))
        .route("/sum/:transaction_id", get(io::get_transaction_sum));

    Router::new()
        .nest("/api/v1/transactionservice", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
