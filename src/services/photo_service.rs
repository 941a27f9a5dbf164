// src/services/photo_service.rs
// DOCUMENTATION: Business logic for photos
// PURPOSE: Create photos from uploads and list a user's photos with enriched comments

use crate::db::PhotoStore;
use crate::errors::GalleryError;
use crate::models::{parse_id, Photo, PhotoResponse};
use crate::services::enrichment::enrich_photos;
use crate::services::{FileStorage, UploadedImage};
use uuid::Uuid;

pub struct PhotoService;

impl PhotoService {
    /// Create a photo owned by `owner` from an uploaded image
    /// DOCUMENTATION: The file is validated and written before the record is inserted;
    /// if the insert fails the written file is removed again
    pub async fn create_photo(
        store: &dyn PhotoStore,
        storage: &FileStorage,
        owner: Uuid,
        upload: Option<UploadedImage>,
    ) -> Result<Photo, GalleryError> {
        let upload = upload
            .ok_or_else(|| GalleryError::InvalidArgument("No file uploaded".to_string()))?;

        let file_name = storage.store(&upload).await?;
        let photo = match store.insert_photo(&Photo::new(owner, file_name.clone())).await {
            Ok(photo) => photo,
            Err(e) => {
                log::error!("Photo insert failed, discarding upload {}: {}", file_name, e);
                storage.remove(&file_name).await;
                return Err(e);
            }
        };

        log::info!("Created photo {} for user {}", photo.id, owner);
        Ok(photo)
    }

    /// Every photo owned by the user, each with its enriched comment thread
    /// DOCUMENTATION: An unknown user yields an empty list, same as a user without photos
    pub async fn list_photos_for_user(
        store: &dyn PhotoStore,
        raw_user_id: &str,
    ) -> Result<Vec<PhotoResponse>, GalleryError> {
        let user_id = parse_id(raw_user_id, "user")?;
        let photos = store.photos_by_owner(user_id).await?;

        if photos.is_empty() {
            match store.find_user(user_id).await {
                Ok(None) => log::warn!("Photos requested for unknown user {}", user_id),
                Ok(Some(_)) => log::debug!("User {} has no photos", user_id),
                Err(e) => log::warn!("Could not check existence of user {}: {}", user_id, e),
            }
            return Ok(Vec::new());
        }

        Ok(enrich_photos(store, photos).await)
    }
}
