//! Key layout of the remote backend.

use crate::domain::models::TransactionId;

pub const TRANSACTION_KEY_PREFIX: &str = "transaction:";
pub const TYPE_INDEX_PREFIX: &str = "type:";
pub const CHILDREN_INDEX_PREFIX: &str = "children:";

/// `transaction:<id>` holds the serialized record
pub fn transaction_key(id: TransactionId) -> String {
    format!("{TRANSACTION_KEY_PREFIX}{id}")
}

/// `type:<type>` holds the set of ids with that label
pub fn type_key(transaction_type: &str) -> String {
    format!("{TYPE_INDEX_PREFIX}{transaction_type}")
}

/// `children:<parent_id>` holds the set of direct child ids
pub fn children_key(parent_id: TransactionId) -> String {
    format!("{CHILDREN_INDEX_PREFIX}{parent_id}")
}
