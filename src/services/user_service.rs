// src/services/user_service.rs
// DOCUMENTATION: Read-only user directory
// PURPOSE: List users and fetch a single profile

use crate::db::PhotoStore;
use crate::errors::GalleryError;
use crate::models::{parse_id, User, UserSummary};

pub struct UserService;

impl UserService {
    /// All users, minimal projection
    pub async fn list_users(store: &dyn PhotoStore) -> Result<Vec<UserSummary>, GalleryError> {
        store.list_users().await
    }

    /// Detailed profile for one user
    /// DOCUMENTATION: The id is validated before the store is consulted
    pub async fn get_user(store: &dyn PhotoStore, raw_id: &str) -> Result<User, GalleryError> {
        let id = parse_id(raw_id, "user")?;

        store.find_user(id).await?.ok_or_else(|| {
            log::debug!("User {} not found", id);
            GalleryError::NotFound("User not found".to_string())
        })
    }
}
