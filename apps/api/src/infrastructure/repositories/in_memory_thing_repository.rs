use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::ThingRepository;
use crate::domain::thing::{Thing, ThingFilter};

/// In-process implementation of ThingRepository
///
/// Keeps things in an ordered map behind an async lock; contents are lost
/// when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryThingRepository {
    inner: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    things: BTreeMap<i64, Thing>,
}

impl InMemoryThingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThingRepository for InMemoryThingRepository {
    async fn insert(&self, thing: Thing) -> Result<Thing, String> {
        let mut store = self.inner.write().await;
        store.next_id += 1;

        let thing = thing.with_id(store.next_id);
        store.things.insert(thing.id(), thing.clone());

        Ok(thing)
    }

    async fn save(&self, thing: &Thing) -> Result<(), String> {
        let mut store = self.inner.write().await;
        match store.things.get_mut(&thing.id()) {
            Some(existing) => {
                *existing = thing.clone();
                Ok(())
            }
            None => Err(format!("Thing not found: {}", thing.id())),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Thing>, String> {
        let store = self.inner.read().await;
        Ok(store.things.get(&id).cloned())
    }

    async fn find_by_filter(&self, filter: &ThingFilter) -> Result<Vec<Thing>, String> {
        let store = self.inner.read().await;
        let matches = store
            .things
            .values()
            .filter(|thing| filter.matches(thing))
            .skip(filter.offset)
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(matches)
    }

    async fn delete(&self, id: i64) -> Result<bool, String> {
        let mut store = self.inner.write().await;
        Ok(store.things.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thing(name: &str) -> Thing {
        Thing::new(name.to_string(), None).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids_from_one() {
        let repo = InMemoryThingRepository::new();

        let first = repo.insert(thing("lamp")).await.unwrap();
        let second = repo.insert(thing("desk")).await.unwrap();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn save_requires_existing_thing() {
        let repo = InMemoryThingRepository::new();
        let mut stored = repo.insert(thing("lamp")).await.unwrap();

        stored.update("floor lamp".to_string(), None).unwrap();
        repo.save(&stored).await.unwrap();
        let found = repo.find_by_id(stored.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "floor lamp");

        let unsaved = thing("ghost").with_id(42);
        assert!(repo.save(&unsaved).await.is_err());
    }

    #[tokio::test]
    async fn filter_applies_offset_and_limit_in_id_order() {
        let repo = InMemoryThingRepository::new();
        for name in ["red lamp", "chair", "blue lamp", "green lamp"] {
            repo.insert(thing(name)).await.unwrap();
        }

        let filter = ThingFilter {
            name_contains: Some("LAMP".to_string()),
            limit: Some(2),
            offset: 1,
        };
        let names: Vec<String> = repo
            .find_by_filter(&filter)
            .await
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();

        assert_eq!(names, vec!["blue lamp", "green lamp"]);
    }

    #[tokio::test]
    async fn delete_reports_whether_thing_existed() {
        let repo = InMemoryThingRepository::new();
        let stored = repo.insert(thing("lamp")).await.unwrap();

        assert!(repo.delete(stored.id()).await.unwrap());
        assert!(!repo.delete(stored.id()).await.unwrap());
        assert_eq!(repo.find_by_id(stored.id()).await.unwrap(), None);
    }
}
