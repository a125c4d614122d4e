//! Wire format of a transaction stored under `transaction:<id>`.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::models::{Transaction, TransactionId};
use crate::storage::error::{StorageError, StorageResult};

/// JSON record. `amount` serializes as a decimal string so scale survives;
/// `createdAt` is RFC 3339 with nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: Decimal,
    pub parent_id: Option<TransactionId>,
    #[serde(with = "rfc3339_nanos")]
    pub created_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionRecord {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id(),
            transaction_type: transaction.transaction_type().to_string(),
            amount: transaction.amount(),
            parent_id: transaction.parent_id(),
            created_at: transaction.created_at(),
        }
    }
}

impl TransactionRecord {
    pub fn encode(transaction: &Transaction) -> StorageResult<String> {
        Ok(serde_json::to_string(&Self::from(transaction))?)
    }

    /// Parse a stored record and re-check the model invariants
    pub fn decode(key: &str, json: &str) -> StorageResult<Transaction> {
        let record: Self = serde_json::from_str(json)?;
        Transaction::restore(
            record.id,
            record.transaction_type,
            record.amount,
            record.parent_id,
            record.created_at,
        )
        .map_err(|e| StorageError::CorruptRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

mod rfc3339_nanos {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Nanos, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_record_preserves_scale_and_nanoseconds() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-17T08:30:00.000000001Z")
            .unwrap()
            .with_timezone(&Utc);
        let tx = Transaction::restore(
            42,
            "cars",
            Decimal::from_str("1000.100").unwrap(),
            Some(41),
            created_at,
        )
        .unwrap();

        let json = TransactionRecord::encode(&tx).unwrap();
        assert!(json.contains(r#""amount":"1000.100""#));
        assert!(json.contains(r#""createdAt":"2024-05-17T08:30:00.000000001Z""#));
        assert!(json.contains(r#""parentId":41"#));

        let decoded = TransactionRecord::decode("transaction:42", &json).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.amount().scale(), 3);
    }

    #[test]
    fn test_decode_rejects_negative_amount() {
        let json = r#"{"id":1,"type":"cars","amount":"-5","parentId":null,"createdAt":"2024-01-01T00:00:00Z"}"#;
        let err = TransactionRecord::decode("transaction:1", json).unwrap_err();
        assert!(matches!(err, StorageError::CorruptRecord { ref key, .. } if key == "transaction:1"));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = TransactionRecord::decode("transaction:1", "not json").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
