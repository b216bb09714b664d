//! Configuration for carstore
//!
//! CLI arguments and environment variable handling using clap.

use std::time::Duration;

use clap::Parser;

use crate::db::schemas::CAR_COLLECTION;
use crate::types::{Result, StoreError};

/// carstore - MongoDB-backed car record store
#[derive(Parser, Debug, Clone)]
#[command(name = "carstore")]
#[command(about = "CRUD data-access layer over a MongoDB car collection")]
pub struct Args {
    /// MongoDB host
    #[arg(long, env = "MONGODB_HOST", default_value = "localhost")]
    pub mongodb_host: String,

    /// MongoDB port
    #[arg(long, env = "MONGODB_PORT", default_value = "27017")]
    pub mongodb_port: u16,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "carstore")]
    pub mongodb_db: String,

    /// Collection holding car documents
    #[arg(long, env = "MONGODB_COLLECTION", default_value = CAR_COLLECTION)]
    pub mongodb_collection: String,

    /// Deadline for connection setup and each store round-trip, in milliseconds
    #[arg(long, env = "TIMEOUT_MS", default_value = "10000")]
    pub timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Assemble the MongoDB connection URI from host and port
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}", self.mongodb_host, self.mongodb_port)
    }

    /// Per-operation deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(StoreError::Config("TIMEOUT_MS must be non-zero".into()));
        }
        if self.mongodb_db.is_empty() {
            return Err(StoreError::Config("MONGODB_DB must be non-empty".into()));
        }
        if self.mongodb_collection.is_empty() {
            return Err(StoreError::Config(
                "MONGODB_COLLECTION must be non-empty".into(),
            ));
        }
        Ok(())
    }
}
