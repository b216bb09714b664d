//! Database schemas for the car store
//!
//! Defines the MongoDB document structure for car records.

mod car;

pub use car::{CarDoc, CAR_COLLECTION};
