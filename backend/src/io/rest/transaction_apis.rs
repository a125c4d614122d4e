//! # REST API for Transactions
//!
//! Endpoints for creating transactions, listing ids by type, and summing a
//! transaction's subtree.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use tracing::info;

use crate::domain::models::{StorageStrategy, TransactionId, UnknownStorageStrategy};
use crate::domain::TransactionError;
use crate::io::rest::error::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::io::rest::mappers::transaction_mapper::TransactionMapper;
use crate::AppState;
use shared::{CreateTransactionRequest, SumResponse, TransactionResponse, TypeTransactionsResponse};

/// `?storage=memory|remote`
#[derive(Debug, Default, Deserialize)]
pub struct StorageQuery {
    pub storage: Option<String>,
}

impl StorageQuery {
    pub fn strategy(&self) -> Result<StorageStrategy, UnknownStorageStrategy> {
        match &self.storage {
            Some(value) => value.parse(),
            None => Ok(StorageStrategy::default()),
        }
    }
}

/// Run a synchronous service call on the blocking pool
async fn run_blocking<T, F>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, TransactionError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(call).await??)
}

/// Create a transaction under the id given in the path
pub async fn create_transaction(
    State(state): State<AppState>,
    ApiPath(transaction_id): ApiPath<TransactionId>,
    ApiQuery(query): ApiQuery<StorageQuery>,
    ApiJson(request): ApiJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    info!("PUT /transaction/{} - request: {:?}, query: {:?}", transaction_id, request, query);

    let strategy = query.strategy()?;
    let command = TransactionMapper::to_create_command(transaction_id, request);
    let service = state.transaction_service.clone();
    let transaction = run_blocking(move || service.create(command, strategy)).await?;

    Ok((StatusCode::CREATED, Json(TransactionMapper::to_dto(transaction))))
}

/// Ids of every transaction with the given type
pub async fn get_transactions_by_type(
    State(state): State<AppState>,
    ApiPath(transaction_type): ApiPath<String>,
    ApiQuery(query): ApiQuery<StorageQuery>,
) -> Result<Json<TypeTransactionsResponse>, ApiError> {
    info!("GET /types/{} - query: {:?}", transaction_type, query);

    let strategy = query.strategy()?;
    let service = state.transaction_service.clone();
    let lookup_type = transaction_type.clone();
    let (transactions, served_by) =
        run_blocking(move || service.get_by_type(&lookup_type, strategy)).await?;

    Ok(Json(TransactionMapper::to_type_dto(
        transaction_type,
        transactions,
        served_by,
    )))
}

/// Sum of a transaction and all of its descendants
pub async fn get_transaction_sum(
    State(state): State<AppState>,
    ApiPath(transaction_id): ApiPath<TransactionId>,
    ApiQuery(query): ApiQuery<StorageQuery>,
) -> Result<Json<SumResponse>, ApiError> {
    info!("GET /sum/{} - query: {:?}", transaction_id, query);

    let strategy = query.strategy()?;
    let service = state.transaction_service.clone();
    let sum = run_blocking(move || service.calculate_sum(transaction_id, strategy)).await?;

    Ok(Json(SumResponse { sum }))
}
