//! Store contracts consumed by the catalog service.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::PageQuery;

/// Read-only access to entities by primary key.
#[async_trait]
pub trait EntityLookup<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;
}

/// Generic CRUD repository trait.
///
/// Defined with generic type parameters so that each entity gets a
/// strongly typed store. Implementations decide how identifiers are
/// generated; `insert` returns the record as persisted.
#[async_trait]
pub trait Repository<Entity, Id>: EntityLookup<Entity, Id>
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Persist a new entity and return it with its generated identifier.
    async fn insert(&self, entity: &Entity) -> AppResult<Entity>;

    /// Overwrite an existing entity and return the stored version.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Fetch one bounded, ordered slice plus the total number of entities.
    async fn find_page(&self, query: &PageQuery) -> AppResult<(Vec<Entity>, u64)>;

    /// Delete an entity by its primary key. Deleting a missing key is not an error.
    async fn delete_by_id(&self, id: Id) -> AppResult<()>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
