//! MongoDB access layer
//!
//! Client wrapper, car document schema, and the repository.

pub mod mongo;
pub mod repository;
pub mod schemas;

pub use mongo::MongoClient;
pub use repository::CarRepository;
pub use schemas::{CarDoc, CAR_COLLECTION};
