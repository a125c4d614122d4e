use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Externally supplied transaction identifier
pub type TransactionId = i64;

/// A construction-time invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount cannot be negative (got {0})")]
    NegativeAmount(Decimal),
    #[error("Field `{0}` is required")]
    MissingField(&'static str),
}

/// Immutable monetary entry, optionally linked to a parent entry.
///
/// Values are only produced by [`Transaction::new`] or
/// [`Transaction::restore`], so every instance satisfies `amount >= 0` and a
/// non-blank type label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    transaction_type: String,
    amount: Decimal,
    parent_id: Option<TransactionId>,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a new transaction stamped with the current time
    pub fn new(
        id: TransactionId,
        transaction_type: impl Into<String>,
        amount: Decimal,
        parent_id: Option<TransactionId>,
    ) -> Result<Self, ValidationError> {
        Self::restore(id, transaction_type, amount, parent_id, Utc::now())
    }

    /// Rebuild a previously stored transaction, keeping its original timestamp
    pub fn restore(
        id: TransactionId,
        transaction_type: impl Into<String>,
        amount: Decimal,
        parent_id: Option<TransactionId>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let transaction_type = transaction_type.into();
        if transaction_type.trim().is_empty() {
            return Err(ValidationError::MissingField("type"));
        }
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(amount));
        }

        Ok(Self {
            id,
            transaction_type,
            amount,
            parent_id,
            created_at,
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn transaction_type(&self) -> &str {
        &self.transaction_type
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn parent_id(&self) -> Option<TransactionId> {
        self.parent_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_transaction_keeps_fields() {
        let before = Utc::now();
        let tx = Transaction::new(10, "cars", Decimal::from_str("5000.50").unwrap(), Some(3))
            .unwrap();

        assert_eq!(tx.id(), 10);
        assert_eq!(tx.transaction_type(), "cars");
        assert_eq!(tx.amount().to_string(), "5000.50");
        assert_eq!(tx.parent_id(), Some(3));
        assert!(tx.created_at() >= before);
    }

    #[test]
    fn test_zero_amount_is_allowed() {
        let tx = Transaction::new(1, "fees", Decimal::ZERO, None).unwrap();
        assert!(tx.amount().is_zero());
        assert_eq!(tx.parent_id(), None);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let err = Transaction::new(1, "refund", Decimal::from(-1), None).unwrap_err();
        assert_eq!(err, ValidationError::NegativeAmount(Decimal::from(-1)));
    }

    #[test]
    fn test_blank_type_is_rejected() {
        let err = Transaction::new(1, "   ", Decimal::ONE, None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("type"));
    }

    #[test]
    fn test_restore_keeps_timestamp() {
        let created_at = DateTime::parse_from_rfc3339("2024-03-01T10:15:30.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let tx = Transaction::restore(7, "rent", Decimal::ONE, None, created_at).unwrap();
        assert_eq!(tx.created_at(), created_at);
    }
}
