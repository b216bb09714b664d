//! MongoDB client wrapper
//!
//! Owns the driver client and verifies liveness at construction.

use std::time::Duration;

use bson::doc;
use mongodb::Client;
use tracing::info;

use crate::types::{Result, StoreError};

/// MongoDB client wrapper
#[derive(Clone, Debug)]
pub struct MongoClient {
    client: Client,
    db_name: String,
}

impl MongoClient {
    /// Connect to MongoDB and verify the connection with a ping.
    ///
    /// Fails with [`StoreError::Connection`] if the address is
    /// unreachable, the timeout elapses, or the ping fails. On success
    /// the wrapper owns the driver client; resources are released when
    /// the last clone is dropped, on every exit path.
    pub async fn connect(uri: &str, db_name: &str, timeout: Duration) -> Result<Self> {
        info!("Connecting to MongoDB at {}", uri);

        // Bound server selection so construction cannot hang on an
        // unreachable address
        let timeout_ms = timeout.as_millis();
        let timeout_uri = if uri.contains('?') {
            format!(
                "{}&serverSelectionTimeoutMS={}&connectTimeoutMS={}",
                uri, timeout_ms, timeout_ms
            )
        } else {
            format!(
                "{}?serverSelectionTimeoutMS={}&connectTimeoutMS={}",
                uri, timeout_ms, timeout_ms
            )
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to connect to MongoDB: {}", e)))?;

        // Verify connection, bounded by the same deadline
        let database = client.database(db_name);
        let ping = database.run_command(doc! { "ping": 1 });
        tokio::time::timeout(timeout, ping)
            .await
            .map_err(|_| StoreError::Connection("MongoDB ping timed out".into()))?
            .map_err(|e| StoreError::Connection(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// Get the raw MongoDB client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the database name
    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}
