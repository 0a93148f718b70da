//! DTOs for write receipts.
//!
//! Field names mirror what the store driver's raw results used to leak to
//! clients, so existing frontends keep parsing the same JSON.

use serde::Serialize;

use crate::domain::entities::{DeleteReceipt, InsertReceipt, UpdateReceipt};

/// JSON form of an insert receipt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceiptResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// JSON form of an update/upsert receipt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceiptResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// JSON form of a delete receipt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceiptResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<InsertReceipt> for InsertReceiptResponse {
    fn from(receipt: InsertReceipt) -> Self {
        Self {
            acknowledged: true,
            inserted_id: receipt.inserted_id,
        }
    }
}

impl From<UpdateReceipt> for UpdateReceiptResponse {
    fn from(receipt: UpdateReceipt) -> Self {
        Self {
            acknowledged: true,
            matched_count: receipt.matched_count,
            modified_count: receipt.modified_count,
            upserted_id: receipt.upserted_id,
        }
    }
}

impl From<DeleteReceipt> for DeleteReceiptResponse {
    fn from(receipt: DeleteReceipt) -> Self {
        Self {
            acknowledged: true,
            deleted_count: receipt.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_receipt_wire_fields() {
        let response: UpdateReceiptResponse = UpdateReceipt {
            matched_count: 1,
            modified_count: 0,
            upserted_id: None,
        }
        .into();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["acknowledged"], true);
        assert_eq!(value["matchedCount"], 1);
        assert_eq!(value["modifiedCount"], 0);
        assert!(value.get("upsertedId").is_none());
    }
}
