//! Shared types for the car store

mod error;

pub use error::{Result, StoreError};
