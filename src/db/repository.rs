//! Car repository
//!
//! CRUD operations over a single collection of car documents. Each
//! operation is one awaited round-trip bounded by the configured
//! deadline; the repository holds no state beyond the collection handle.

use std::time::Duration;

use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::Collection;

use crate::db::mongo::MongoClient;
use crate::db::schemas::CarDoc;
use crate::types::{Result, StoreError};

/// Repository over one fixed collection of car documents
#[derive(Clone)]
pub struct CarRepository {
    collection: Collection<CarDoc>,
    op_timeout: Duration,
}

impl CarRepository {
    /// Create a repository over the named collection
    pub fn new(mongo: &MongoClient, collection_name: &str, op_timeout: Duration) -> Self {
        let collection = mongo
            .inner()
            .database(mongo.db_name())
            .collection::<CarDoc>(collection_name);
        Self {
            collection,
            op_timeout,
        }
    }

    /// Insert a not-yet-persisted car and return the store-assigned ID.
    ///
    /// The car must not carry an ID (the store generates one) and its
    /// name must be non-empty.
    pub async fn insert(&self, car: CarDoc) -> Result<ObjectId> {
        validate_insert(&car)?;

        let result = tokio::time::timeout(self.op_timeout, self.collection.insert_one(car))
            .await
            .map_err(|_| StoreError::Write("insert timed out".into()))?
            .map_err(|e| StoreError::Write(format!("insert failed: {}", e)))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Write("failed to get inserted ID".into()))
    }

    /// Fetch every car in the collection, in the store's natural cursor
    /// order.
    ///
    /// Fail-fast: the first decode or connectivity error aborts with
    /// [`StoreError::Read`] and discards any partially read documents.
    /// The cursor is released on every exit path.
    pub async fn get_all(&self) -> Result<Vec<CarDoc>> {
        tokio::time::timeout(self.op_timeout, self.collect_all())
            .await
            .map_err(|_| StoreError::Read("query timed out".into()))?
    }

    async fn collect_all(&self) -> Result<Vec<CarDoc>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Read(format!("find failed: {}", e)))?;

        let mut cars = Vec::new();
        while let Some(car) = cursor
            .try_next()
            .await
            .map_err(|e| StoreError::Read(format!("cursor read failed: {}", e)))?
        {
            cars.push(car);
        }

        Ok(cars)
    }

    /// Replace the mutable fields of the car matching `car.id`.
    ///
    /// The ID itself is never touched. A well-formed ID that matches no
    /// document is not an error: the call succeeds as a no-op.
    pub async fn update_by_id(&self, car: &CarDoc) -> Result<()> {
        let id = car.id.ok_or_else(|| {
            StoreError::Write("update requires a persisted record (ID must be set)".into())
        })?;

        let update = self
            .collection
            .update_one(doc! { "_id": id }, set_fields(car));
        tokio::time::timeout(self.op_timeout, update)
            .await
            .map_err(|_| StoreError::Write("update timed out".into()))?
            .map_err(|e| StoreError::Write(format!("update failed: {}", e)))?;

        // matched_count == 0 is deliberately not surfaced
        Ok(())
    }

    /// Delete the car with the given ID. No-op if absent.
    pub async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        let delete = self.collection.delete_one(doc! { "_id": id });
        tokio::time::timeout(self.op_timeout, delete)
            .await
            .map_err(|_| StoreError::Write("delete timed out".into()))?
            .map_err(|e| StoreError::Write(format!("delete failed: {}", e)))?;

        // deleted_count == 0 is deliberately not surfaced
        Ok(())
    }
}

/// Check insert preconditions: no ID yet, non-empty name
fn validate_insert(car: &CarDoc) -> Result<()> {
    if car.id.is_some() {
        return Err(StoreError::Write(
            "insert requires an unpersisted record (ID must be empty)".into(),
        ));
    }
    if car.name.is_empty() {
        return Err(StoreError::Write("car name must be non-empty".into()));
    }
    Ok(())
}

/// Build the field-set update for a car's mutable fields
fn set_fields(car: &CarDoc) -> Document {
    doc! {
        "$set": {
            "name": &car.name,
            "color": &car.color,
        }
    }
}
