//! carstore - MongoDB-backed data-access layer for car records
//!
//! A small repository over one MongoDB collection of car documents:
//! insert, fetch-all, update-by-id, delete-by-id. Construction
//! establishes and verifies the connection; every operation is a single
//! bounded round-trip.

pub mod config;
pub mod db;
pub mod types;

pub use config::Args;
pub use db::{CarDoc, CarRepository, MongoClient, CAR_COLLECTION};
pub use types::{Result, StoreError};
