use async_trait::async_trait;

use crate::domain::thing::{Thing, ThingFilter};

/// Repository trait for Thing
///
/// Implementations assign ids on insert; ids start at 1 so that 0 never
/// names an existing thing.
#[async_trait]
pub trait ThingRepository: Send + Sync {
    /// Store an unsaved thing, returning it with its assigned id
    async fn insert(&self, thing: Thing) -> Result<Thing, String>;

    /// Replace an existing thing
    async fn save(&self, thing: &Thing) -> Result<(), String>;

    /// Find a thing by its ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Thing>, String>;

    /// Find things matching a filter, ordered by id
    async fn find_by_filter(&self, filter: &ThingFilter) -> Result<Vec<Thing>, String>;

    /// Delete a thing by ID, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool, String>;
}
