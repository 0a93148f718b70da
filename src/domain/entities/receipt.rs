//! Write receipts: the normalized form of the store driver's write results.
//!
//! Handlers serialize these back to clients instead of forwarding the raw
//! driver structs, keeping the wire contract (`insertedId`, `matchedCount`,
//! `modifiedCount`, `upsertedId`, `deletedCount`) while the driver types stay
//! an implementation detail.

use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

/// Result of a single-document insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReceipt {
    pub inserted_id: String,
}

/// Result of a single-document update or upsert.
///
/// `upserted_id` is set only when the update inserted a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReceipt {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

/// Result of a single-document delete.
///
/// Deleting a nonexistent document yields `deleted_count: 0`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReceipt {
    pub deleted_count: u64,
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

impl From<InsertOneResult> for InsertReceipt {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: id_to_string(result.inserted_id),
        }
    }
}

impl From<UpdateResult> for UpdateReceipt {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.map(id_to_string),
        }
    }
}

impl From<DeleteResult> for DeleteReceipt {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_object_id_renders_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_to_string(Bson::ObjectId(oid)), oid.to_hex());
    }

    #[test]
    fn test_non_object_id_falls_back_to_display() {
        assert_eq!(
            id_to_string(Bson::String("custom-key".to_string())),
            r#""custom-key""#
        );
    }
}
