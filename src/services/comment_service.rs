// src/services/comment_service.rs
// DOCUMENTATION: Appending comments to photos
// PURPOSE: Validate, append atomically, return the enriched thread

use crate::db::PhotoStore;
use crate::errors::GalleryError;
use crate::models::{parse_id, validate_not_blank, Comment, PhotoResponse, EMPTY_COMMENT_MESSAGE};
use crate::services::enrichment::enrich_photo;
use uuid::Uuid;

pub struct CommentService;

impl CommentService {
    /// Append a comment by `author` to the photo and return the updated photo
    /// DOCUMENTATION: All validation happens before the write
    pub async fn add_comment(
        store: &dyn PhotoStore,
        raw_photo_id: &str,
        author: Uuid,
        body: &str,
    ) -> Result<PhotoResponse, GalleryError> {
        let photo_id = parse_id(raw_photo_id, "photo")?;

        validate_not_blank(body)
            .map_err(|_| GalleryError::InvalidArgument(EMPTY_COMMENT_MESSAGE.to_string()))?;

        let comment = Comment::new(author, body);
        let photo = store
            .append_comment(photo_id, &comment)
            .await?
            .ok_or_else(|| GalleryError::NotFound("Photo not found".to_string()))?;

        log::info!(
            "User {} commented on photo {} ({} comments)",
            author,
            photo_id,
            photo.comments.len()
        );

        Ok(enrich_photo(store, photo).await)
    }
}
