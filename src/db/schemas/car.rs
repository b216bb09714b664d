//! Car document schema
//!
//! The single entity type managed by this store.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Default collection name for cars
pub const CAR_COLLECTION: &str = "cars";

/// Car document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CarDoc {
    /// MongoDB document ID, absent until first persisted.
    /// Omitted from the encoded document when empty so the store
    /// assigns one on insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Car name, non-empty
    pub name: String,

    /// Car color
    pub color: String,
}

impl CarDoc {
    /// Create a new, not-yet-persisted car document
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
        }
    }
}
