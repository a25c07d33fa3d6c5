//! Integration tests for the repository and service layers
//!
//! These tests exercise the in-memory repository through the public API,
//! including concurrent writers sharing one store.

use std::collections::HashSet;
use std::sync::Arc;

use resthelper_api::api::errors::{translate_error_to_status_code, ServiceError};
use resthelper_api::domain::repositories::ThingRepository;
use resthelper_api::domain::{Thing, ThingFilter};
use resthelper_api::infrastructure::repositories::InMemoryThingRepository;
use resthelper_api::services::ThingService;

#[tokio::test]
async fn test_concurrent_inserts_get_unique_ids() {
    let repo = Arc::new(InMemoryThingRepository::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let thing = Thing::new(format!("thing {}", i), None).expect("valid thing");
            repo.insert(thing).await.expect("insert succeeds").id()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 32);
    assert!(ids.iter().all(|id| (1..=32).contains(id)));

    let all = repo.find_by_filter(&ThingFilter::default()).await.unwrap();
    let ordered: Vec<i64> = all.iter().map(Thing::id).collect();
    assert_eq!(ordered, (1..=32).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_service_errors_translate_to_statuses() {
    let service = ThingService::new(Arc::new(InMemoryThingRepository::new()));

    let err = service.get(99).await.unwrap_err();
    assert_eq!(translate_error_to_status_code(&err).as_u16(), 404);

    let err = service.create(String::new(), None).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(translate_error_to_status_code(&err).as_u16(), 400);
}

#[tokio::test]
async fn test_service_round_trip_through_shared_store() {
    let repo: Arc<dyn ThingRepository> = Arc::new(InMemoryThingRepository::new());
    let writer = ThingService::new(repo.clone());
    let reader = ThingService::new(repo);

    let created = writer
        .create("lamp".to_string(), Some("brass".to_string()))
        .await
        .unwrap();

    let found = reader.get(created.id()).await.unwrap();
    assert_eq!(found, created);

    writer.delete(created.id()).await.unwrap();
    assert!(matches!(
        reader.get(created.id()).await,
        Err(ServiceError::NotFound(_))
    ));
}
