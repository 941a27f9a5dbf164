// src/db/memory.rs
// DOCUMENTATION: In-memory PhotoStore used by the test suite
// PURPOSE: Same contract as PgStore without a database

use crate::db::PhotoStore;
use crate::errors::GalleryError;
use crate::models::{Comment, Photo, User, UserSummary};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe store backed by vectors (insertion order = storage order)
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    photos: RwLock<Vec<Photo>>,
    reads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: User) {
        self.users.write().await.push(user);
    }

    /// Remove a user record, leaving their photos and comments in place
    pub async fn remove_user(&self, id: Uuid) {
        self.users.write().await.retain(|u| u.id != id);
    }

    /// Number of store calls made so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<UserSummary>, GalleryError> {
        self.touch();
        Ok(self.users.read().await.iter().map(User::to_summary).collect())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, GalleryError> {
        self.touch();
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, GalleryError> {
        self.touch();
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(User::to_summary)
            .collect())
    }

    async fn insert_photo(&self, photo: &Photo) -> Result<Photo, GalleryError> {
        self.touch();
        self.photos.write().await.push(photo.clone());
        Ok(photo.clone())
    }

    async fn photos_by_owner(&self, user_id: Uuid) -> Result<Vec<Photo>, GalleryError> {
        self.touch();
        Ok(self
            .photos
            .read()
            .await
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn append_comment(
        &self,
        photo_id: Uuid,
        comment: &Comment,
    ) -> Result<Option<Photo>, GalleryError> {
        self.touch();
        let mut photos = self.photos.write().await;
        Ok(photos.iter_mut().find(|p| p.id == photo_id).map(|photo| {
            photo.comments.push(comment.clone());
            photo.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(MemoryStore::new());
        let photo = store
            .insert_photo(&Photo::new(Uuid::new_v4(), "a.jpg".to_string()))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let comment = Comment::new(Uuid::new_v4(), &format!("comment {}", i));
                store.append_comment(photo.id, &comment).await.unwrap()
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }

        let photos = store.photos_by_owner(photo.user_id).await.unwrap();
        assert_eq!(photos[0].comments.len(), 16);
    }

    #[tokio::test]
    async fn test_append_to_unknown_photo() {
        let store = MemoryStore::new();
        let comment = Comment::new(Uuid::new_v4(), "hello");
        assert!(store
            .append_comment(Uuid::new_v4(), &comment)
            .await
            .unwrap()
            .is_none());
    }
}
