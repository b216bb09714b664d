//! carstore - MongoDB-backed car record store
//!
//! Thin caller that exercises the repository: insert a car, list the
//! collection, update the car, delete it, list again.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carstore::{config::Args, db::MongoClient, CarDoc, CarRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("carstore={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("MongoDB: {}", args.uri());
    info!("Database: {} / collection: {}", args.mongodb_db, args.mongodb_collection);

    // Connect to MongoDB
    let mongo = match MongoClient::connect(&args.uri(), &args.mongodb_db, args.timeout()).await {
        Ok(client) => client,
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    let repo = CarRepository::new(&mongo, &args.mongodb_collection, args.timeout());

    // Insert a record
    let id = repo.insert(CarDoc::new("Tesla Model M", "White")).await?;
    info!("Inserted car with id {}", id);

    // List everything in the collection
    let cars = repo.get_all().await?;
    info!("Collection holds {} car(s): {:?}", cars.len(), cars);

    // Update the record we just inserted
    let updated = CarDoc {
        id: Some(id),
        name: "Virtus".into(),
        color: "Navy Blue".into(),
    };
    repo.update_by_id(&updated).await?;
    info!("Updated car {}", id);

    let cars = repo.get_all().await?;
    info!("Collection holds {} car(s): {:?}", cars.len(), cars);

    // Delete it again
    repo.delete_by_id(id).await?;
    info!("Deleted car {}", id);

    let cars = repo.get_all().await?;
    info!("Collection holds {} car(s)", cars.len());

    Ok(())
}
