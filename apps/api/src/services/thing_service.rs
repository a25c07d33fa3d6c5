use std::sync::Arc;

use crate::api::errors::ServiceError;
use crate::domain::repositories::ThingRepository;
use crate::domain::thing::{Thing, ThingFilter};

/// Business operations on things
///
/// Each method is shaped to be handed to one of the request adapters as its
/// callback: storage failures become `ServiceError::Internal`, unknown ids
/// `ServiceError::NotFound` and rule violations `ServiceError::Validation`.
#[derive(Clone)]
pub struct ThingService {
    repo: Arc<dyn ThingRepository>,
}

impl ThingService {
    pub fn new(repo: Arc<dyn ThingRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Thing, ServiceError> {
        let thing = Thing::new(name, description).map_err(ServiceError::Validation)?;

        let stored = self.repo.insert(thing).await?;
        tracing::info!(thing_id = stored.id(), "Thing created");

        Ok(stored)
    }

    pub async fn update(
        &self,
        id: i64,
        name: String,
        description: Option<String>,
    ) -> Result<Thing, ServiceError> {
        let mut thing = self.get(id).await?;
        thing
            .update(name, description)
            .map_err(ServiceError::Validation)?;

        self.repo.save(&thing).await?;
        tracing::info!(thing_id = id, "Thing updated");

        Ok(thing)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(format!("thing {}", id)));
        }

        tracing::info!(thing_id = id, "Thing deleted");
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<Thing, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("thing {}", id)))
    }

    pub async fn filter(&self, filter: &ThingFilter) -> Result<Vec<Thing>, ServiceError> {
        Ok(self.repo.find_by_filter(filter).await?)
    }
}
