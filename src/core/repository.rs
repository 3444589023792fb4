use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, assigning its identifier, and return the stored copy
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // replaces the entity stored under id
    async fn update(&self, id: &str, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in unspecified order
    async fn get_all(&self) -> LibraryResult<Vec<Entity>>;
}
