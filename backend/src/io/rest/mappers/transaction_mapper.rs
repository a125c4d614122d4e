use crate::domain::commands::transactions::CreateTransactionCommand;
use crate::domain::models::{StorageStrategy, Transaction, TransactionId};
use shared::{CreateTransactionRequest, TransactionResponse, TypeTransactionsResponse};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_create_command(
        id: TransactionId,
        request: CreateTransactionRequest,
    ) -> CreateTransactionCommand {
        CreateTransactionCommand {
            id,
            transaction_type: request.transaction_type,
            amount: request.amount,
            parent_id: request.parent_id,
        }
    }

    pub fn to_dto(domain: Transaction) -> TransactionResponse {
        TransactionResponse {
            id: domain.id(),
            transaction_type: domain.transaction_type().to_string(),
            amount: domain.amount(),
            parent_id: domain.parent_id(),
            created_at: domain.created_at(),
        }
    }

    /// Ids are sorted so the response is stable across calls
    pub fn to_type_dto(
        transaction_type: String,
        transactions: Vec<Transaction>,
        storage: StorageStrategy,
    ) -> TypeTransactionsResponse {
        let mut ids: Vec<TransactionId> = transactions.iter().map(Transaction::id).collect();
        ids.sort_unstable();
        TypeTransactionsResponse::new(transaction_type, ids, storage.as_str().to_string())
    }
}
