// src/db/store.rs
// DOCUMENTATION: Storage seam between services and persistence
// PURPOSE: Lets services run against Postgres in production and memory in tests

use crate::errors::GalleryError;
use crate::models::{Comment, Photo, User, UserSummary};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Document-style store for users and photos
/// DOCUMENTATION: Every method maps driver faults to GalleryError::DatabaseError
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// All users, minimal projection, storage order
    async fn list_users(&self) -> Result<Vec<UserSummary>, GalleryError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, GalleryError>;

    /// Multi-get of user summaries. Unknown ids are simply absent from the result.
    async fn find_user_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, GalleryError>;

    async fn insert_photo(&self, photo: &Photo) -> Result<Photo, GalleryError>;

    /// Photos owned by `user_id`, storage order
    async fn photos_by_owner(&self, user_id: Uuid) -> Result<Vec<Photo>, GalleryError>;

    /// Atomically append `comment` to the photo's thread.
    /// Returns the updated photo, or None when no such photo exists.
    async fn append_comment(
        &self,
        photo_id: Uuid,
        comment: &Comment,
    ) -> Result<Option<Photo>, GalleryError>;
}

pub type SharedStore = Arc<dyn PhotoStore>;
