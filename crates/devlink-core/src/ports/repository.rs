use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Profile, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity, returning the post-update state.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting an absent entity is a no-op.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, newest first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Delete every post authored by `author_id`, returning how many went.
    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError>;
}

/// Profile repository. Profiles are keyed 1:1 by their owning user.
#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, Uuid> {
    /// Find the profile owned by `user_id`.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError>;

    /// All profiles, unfiltered.
    async fn find_all(&self) -> Result<Vec<Profile>, RepoError>;

    /// Delete the profile owned by `user_id`, if any.
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), RepoError>;
}
