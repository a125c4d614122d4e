//! Transaction service domain logic: creation, type lookup and subtree sums.
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::commands::transactions::CreateTransactionCommand;
use crate::domain::errors::TransactionError;
use crate::domain::models::{StorageStrategy, Transaction, TransactionId};
use crate::storage::{StoreSelector, TransactionStorage};

#[derive(Clone)]
pub struct TransactionService {
    selector: StoreSelector,
}

impl TransactionService {
    pub fn new(selector: StoreSelector) -> Self {
        Self { selector }
    }

    /// Record a new transaction.
    ///
    /// A duplicate id is reported before a missing parent when both apply.
    pub fn create(
        &self,
        command: CreateTransactionCommand,
        strategy: StorageStrategy,
    ) -> Result<Transaction, TransactionError> {
        let store = self.selector.get_store(strategy);
        info!(
            "Creating transaction {} with {} storage",
            command.id,
            store.implementation_type()
        );

        if store.exists_by_id(command.id)? {
            return Err(TransactionError::DuplicateId(command.id));
        }

        if let Some(parent_id) = command.parent_id {
            if !store.exists_by_id(parent_id)? {
                return Err(TransactionError::ParentNotFound(parent_id));
            }
        }

        let transaction = Transaction::new(
            command.id,
            command.transaction_type,
            command.amount,
            command.parent_id,
        )?;

        Ok(store.save(transaction)?)
    }

    /// Every transaction with the given type label, in no particular order,
    /// together with the backend that served the lookup after any fallback
    pub fn get_by_type(
        &self,
        transaction_type: &str,
        strategy: StorageStrategy,
    ) -> Result<(Vec<Transaction>, StorageStrategy), TransactionError> {
        let store = self.selector.get_store(strategy);
        let served_by = store.implementation_type();
        info!(
            "Getting transactions of type {} with {} storage",
            transaction_type, served_by
        );

        Ok((store.find_by_type(transaction_type)?, served_by))
    }

    /// Amount of a transaction plus the amounts of all its descendants
    pub fn calculate_sum(
        &self,
        transaction_id: TransactionId,
        strategy: StorageStrategy,
    ) -> Result<Decimal, TransactionError> {
        let store = self.selector.get_store(strategy);
        info!(
            "Calculating sum of transaction {} with {} storage",
            transaction_id,
            store.implementation_type()
        );

        let root = store
            .find_by_id(transaction_id)?
            .ok_or(TransactionError::NotFound(transaction_id))?;

        let sum = subtree_sum(store.as_ref(), root)?;
        debug!("Sum of transaction {} is {}", transaction_id, sum);
        Ok(sum)
    }
}

/// Depth-first walk with an explicit stack, one children lookup per node.
///
/// No cycle detection: the creation path cannot produce a cycle.
fn subtree_sum(
    store: &dyn TransactionStorage,
    root: Transaction,
) -> Result<Decimal, TransactionError> {
    let root_id = root.id();
    let mut sum = Decimal::ZERO;
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        sum = sum
            .checked_add(node.amount())
            .ok_or(TransactionError::SumOverflow(root_id))?;
        pending.extend(store.find_children_of(node.id())?);
    }

    Ok(sum)
}
