//! Request and response payloads shared between the ledger server and its
//! HTTP clients.
//!
//! Field names follow the camelCase wire format (`parentId`, `createdAt`,
//! `transactionIds`). Amounts are `rust_decimal::Decimal` and serialize as
//! decimal strings so no precision is lost in transit. Numeric JSON input is
//! accepted as well and read digit for digit, never through a float.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `PUT /transaction/:transaction_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Free-form category label
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Non-negative amount
    pub amount: Decimal,
    /// Optional parent transaction; must already exist
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// A stored transaction as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: Decimal,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate of a transaction and all of its descendants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumResponse {
    pub sum: Decimal,
}

/// Ids of every transaction carrying a given type label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeTransactionsResponse {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub transaction_ids: Vec<i64>,
    pub count: usize,
    /// Backend that actually served the lookup (after any fallback)
    pub storage: String,
}

impl TypeTransactionsResponse {
    pub fn new(transaction_type: String, transaction_ids: Vec<i64>, storage: String) -> Self {
        let count = transaction_ids.len();
        Self {
            transaction_type,
            transaction_ids,
            count,
            storage,
        }
    }
}

/// Error body returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable code, e.g. `duplicate_id`
    pub error: String,
    /// Human-readable description
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_create_request_accepts_numeric_amount_and_missing_parent() {
        let request: CreateTransactionRequest =
            serde_json::from_str(r#"{"type": "cars", "amount": 5000}"#).unwrap();

        assert_eq!(request.transaction_type, "cars");
        assert_eq!(request.amount, Decimal::from(5000));
        assert_eq!(request.parent_id, None);
    }

    #[test]
    fn test_numeric_amount_keeps_every_digit() {
        let request: CreateTransactionRequest =
            serde_json::from_str(r#"{"type": "a", "amount": 12345678901234567.89}"#).unwrap();

        assert_eq!(request.amount.to_string(), "12345678901234567.89");
    }

    #[test]
    fn test_create_request_reads_parent_id() {
        let request: CreateTransactionRequest =
            serde_json::from_str(r#"{"type": "shopping", "amount": "10.25", "parentId": 10}"#)
                .unwrap();

        assert_eq!(request.amount, Decimal::from_str("10.25").unwrap());
        assert_eq!(request.parent_id, Some(10));
    }

    #[test]
    fn test_type_response_counts_ids() {
        let response = TypeTransactionsResponse::new(
            "cars".to_string(),
            vec![5000, 5001],
            "memory".to_string(),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "cars");
        assert_eq!(json["transactionIds"], serde_json::json!([5000, 5001]));
        assert_eq!(json["count"], 2);
    }
}
