// src/services/file_storage.rs
// DOCUMENTATION: Uploaded image validation and disk persistence
// PURPOSE: Decide whether an upload is an acceptable image and write it under UPLOAD_DIR

use crate::errors::GalleryError;
use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Image received from a multipart upload
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Writes accepted images into a single directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    max_bytes: usize,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Check extension, content type and size
    /// Returns the normalized (lowercase) extension
    pub fn validate(&self, image: &UploadedImage) -> Result<String, GalleryError> {
        let extension = Path::new(&image.original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .filter(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()));

        let is_image_type = image
            .content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(false);

        let extension = match extension {
            Some(ext) if is_image_type => ext,
            _ => {
                log::warn!(
                    "Rejected upload {:?} with content type {:?}",
                    image.original_name,
                    image.content_type
                );
                return Err(GalleryError::InvalidArgument(
                    "Only image files are allowed".to_string(),
                ));
            }
        };

        if image.bytes.is_empty() {
            return Err(GalleryError::InvalidArgument("No file uploaded".to_string()));
        }

        if image.bytes.len() > self.max_bytes {
            return Err(GalleryError::InvalidArgument("File too large".to_string()));
        }

        Ok(extension)
    }

    /// Validate and write the image, returning the stored file name
    pub async fn store(&self, image: &UploadedImage) -> Result<String, GalleryError> {
        let extension = self.validate(image)?;
        let file_name = format!(
            "{}_{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            extension
        );

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            log::error!("Failed to create upload dir {}: {}", self.root.display(), e);
            GalleryError::FileStorageError(e.to_string())
        })?;

        let path = self.root.join(&file_name);
        tokio::fs::write(&path, &image.bytes).await.map_err(|e| {
            log::error!("Failed to write upload {}: {}", path.display(), e);
            GalleryError::FileStorageError(e.to_string())
        })?;

        log::info!("Stored upload {} ({} bytes)", file_name, image.bytes.len());
        Ok(file_name)
    }

    /// Delete a previously stored file; failures are logged, not returned
    pub async fn remove(&self, file_name: &str) {
        let path = self.root.join(file_name);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            log::warn!("Failed to remove upload {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, content_type: Option<&str>, len: usize) -> UploadedImage {
        UploadedImage {
            original_name: name.to_string(),
            content_type: content_type.map(str::to_string),
            bytes: vec![0xFF; len],
        }
    }

    #[test]
    fn test_validate_accepts_images() {
        let storage = FileStorage::new("unused", 64);
        assert_eq!(
            storage.validate(&image("Cat.JPG", Some("image/jpeg"), 10)).unwrap(),
            "jpg"
        );
        assert_eq!(
            storage.validate(&image("a.b.png", Some("image/png"), 10)).unwrap(),
            "png"
        );
    }

    #[test]
    fn test_validate_rejects_non_images() {
        let storage = FileStorage::new("unused", 64);
        for img in [
            image("notes.txt", Some("text/plain"), 10),
            image("evil.png", Some("application/octet-stream"), 10),
            image("photo.jpg", None, 10),
            image("noext", Some("image/png"), 10),
        ] {
            match storage.validate(&img) {
                Err(GalleryError::InvalidArgument(msg)) => {
                    assert_eq!(msg, "Only image files are allowed")
                }
                other => panic!("expected rejection for {:?}, got {:?}", img.original_name, other),
            }
        }
    }

    #[test]
    fn test_validate_size_limits() {
        let storage = FileStorage::new("unused", 8);
        assert!(storage.validate(&image("a.gif", Some("image/gif"), 8)).is_ok());
        assert!(matches!(
            storage.validate(&image("a.gif", Some("image/gif"), 9)),
            Err(GalleryError::InvalidArgument(ref m)) if m == "File too large"
        ));
        assert!(matches!(
            storage.validate(&image("a.gif", Some("image/gif"), 0)),
            Err(GalleryError::InvalidArgument(ref m)) if m == "No file uploaded"
        ));
    }

    #[tokio::test]
    async fn test_store_writes_file() {
        let root = std::env::temp_dir().join(format!("gallery-store-{}", Uuid::new_v4()));
        let storage = FileStorage::new(&root, 64);

        let name = storage
            .store(&image("sunset.webp", Some("image/webp"), 12))
            .await
            .unwrap();

        assert!(name.ends_with(".webp"));
        let written = tokio::fs::read(root.join(&name)).await.unwrap();
        assert_eq!(written.len(), 12);

        tokio::fs::remove_dir_all(&root).await.ok();
    }

    #[tokio::test]
    async fn test_remove_deletes_stored_file() {
        let root = std::env::temp_dir().join(format!("gallery-store-{}", Uuid::new_v4()));
        let storage = FileStorage::new(&root, 64);

        let name = storage
            .store(&image("cat.png", Some("image/png"), 4))
            .await
            .unwrap();
        storage.remove(&name).await;
        assert!(!root.join(&name).exists());

        // Already gone: logged only
        storage.remove(&name).await;

        tokio::fs::remove_dir_all(&root).await.ok();
    }
}
