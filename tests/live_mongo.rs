//! Integration tests against a live MongoDB instance.
//!
//! Ignored by default; run with a local server via
//! `cargo test -- --ignored`. Each test works in its own collection so
//! runs do not interfere.

use std::time::Duration;

use bson::{doc, oid::ObjectId};
use carstore::{CarDoc, CarRepository, MongoClient, StoreError};

const TEST_DB: &str = "carstore_test";

async fn test_repo(tag: &str) -> (MongoClient, CarRepository, String) {
    let host = std::env::var("MONGODB_HOST").unwrap_or_else(|_| "localhost".into());
    let port = std::env::var("MONGODB_PORT").unwrap_or_else(|_| "27017".into());
    let uri = format!("mongodb://{}:{}", host, port);

    let mongo = MongoClient::connect(&uri, TEST_DB, Duration::from_secs(5))
        .await
        .expect("test MongoDB must be reachable");

    let collection = format!("cars_{}_{}", tag, ObjectId::new().to_hex());
    let repo = CarRepository::new(&mongo, &collection, Duration::from_secs(5));
    (mongo, repo, collection)
}

async fn drop_collection(mongo: &MongoClient, name: &str) {
    let _ = mongo
        .inner()
        .database(TEST_DB)
        .collection::<CarDoc>(name)
        .drop()
        .await;
}

#[tokio::test]
#[ignore]
async fn insert_then_get_all_round_trips() {
    let (mongo, repo, collection) = test_repo("roundtrip").await;

    let id = repo
        .insert(CarDoc::new("Tesla Model M", "White"))
        .await
        .unwrap();

    let cars = repo.get_all().await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, Some(id));
    assert_eq!(cars[0].name, "Tesla Model M");
    assert_eq!(cars[0].color, "White");

    drop_collection(&mongo, &collection).await;
}

#[tokio::test]
#[ignore]
async fn delete_is_idempotent() {
    let (mongo, repo, collection) = test_repo("delete").await;

    let id = repo.insert(CarDoc::new("Tesla Model M", "White")).await.unwrap();

    repo.delete_by_id(id).await.unwrap();
    // Second delete of the same id is a no-op, not an error
    repo.delete_by_id(id).await.unwrap();

    assert!(repo.get_all().await.unwrap().is_empty());

    drop_collection(&mongo, &collection).await;
}

#[tokio::test]
#[ignore]
async fn update_of_missing_id_is_a_noop() {
    let (mongo, repo, collection) = test_repo("updatemiss").await;

    let ghost = CarDoc {
        id: Some(ObjectId::new()),
        name: "Virtus".into(),
        color: "Navy Blue".into(),
    };

    repo.update_by_id(&ghost).await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());

    drop_collection(&mongo, &collection).await;
}

#[tokio::test]
#[ignore]
async fn update_changes_fields_and_keeps_id() {
    let (mongo, repo, collection) = test_repo("update").await;

    let id = repo.insert(CarDoc::new("Tesla Model M", "White")).await.unwrap();

    repo.update_by_id(&CarDoc {
        id: Some(id),
        name: "Virtus".into(),
        color: "Navy Blue".into(),
    })
    .await
    .unwrap();

    let cars = repo.get_all().await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, Some(id));
    assert_eq!(cars[0].name, "Virtus");
    assert_eq!(cars[0].color, "Navy Blue");

    drop_collection(&mongo, &collection).await;
}

#[tokio::test]
#[ignore]
async fn malformed_document_fails_the_whole_read() {
    let (mongo, repo, collection) = test_repo("malformed").await;

    repo.insert(CarDoc::new("Tesla Model M", "White")).await.unwrap();

    // Plant a document that does not decode into the car shape
    mongo
        .inner()
        .database(TEST_DB)
        .collection::<bson::Document>(&collection)
        .insert_one(doc! { "name": "Broken", "color": 7 })
        .await
        .unwrap();

    let err = repo.get_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Read(_)));

    drop_collection(&mongo, &collection).await;
}

#[tokio::test]
#[ignore]
async fn full_crud_scenario() {
    let (mongo, repo, collection) = test_repo("scenario").await;

    let id = repo
        .insert(CarDoc::new("Tesla Model M", "White"))
        .await
        .unwrap();

    let cars = repo.get_all().await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].name, "Tesla Model M");
    assert_eq!(cars[0].color, "White");

    repo.update_by_id(&CarDoc {
        id: Some(id),
        name: "Virtus".into(),
        color: "Navy Blue".into(),
    })
    .await
    .unwrap();

    let cars = repo.get_all().await.unwrap();
    assert_eq!(cars, vec![CarDoc {
        id: Some(id),
        name: "Virtus".into(),
        color: "Navy Blue".into(),
    }]);

    repo.delete_by_id(id).await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());

    drop_collection(&mongo, &collection).await;
}

#[tokio::test]
#[ignore]
async fn unreachable_address_is_a_connection_error() {
    // Reserved TEST-NET address, nothing listens there
    let err = MongoClient::connect(
        "mongodb://192.0.2.1:27017",
        TEST_DB,
        Duration::from_millis(500),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::Connection(_)));
}
