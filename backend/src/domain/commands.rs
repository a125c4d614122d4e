//! Domain-level command types.
//!
//! The REST layer maps the public DTOs from the `shared` crate into these
//! before calling into the service.

pub mod transactions {
    use rust_decimal::Decimal;

    use crate::domain::models::TransactionId;

    /// Input for creating a new transaction.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CreateTransactionCommand {
        pub id: TransactionId,
        pub transaction_type: String,
        pub amount: Decimal,
        pub parent_id: Option<TransactionId>,
    }
}
