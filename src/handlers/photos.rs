// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photos and comments
// PURPOSE: Parse requests, call services, return responses

use crate::db::PhotoStore;
use crate::errors::GalleryError;
use crate::middleware::AuthenticatedUser;
use crate::models::CreateCommentRequest;
use crate::services::{CommentService, FileStorage, PhotoService, UploadedImage};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;

const PHOTO_FIELD: &str = "photo";

/// GET /photo/photosOfUser/{id}
/// Photos of a user with enriched comments (public)
pub async fn photos_of_user(
    store: web::Data<dyn PhotoStore>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let photos = PhotoService::list_photos_for_user(store.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

/// GET /photo/{id}
/// Same listing, for authenticated callers
pub async fn photos_of_user_authenticated(
    store: web::Data<dyn PhotoStore>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let photos = PhotoService::list_photos_for_user(store.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

/// POST /photo/new
/// Upload a photo (multipart field `photo`) owned by the caller
pub async fn upload_photo(
    store: web::Data<dyn PhotoStore>,
    storage: web::Data<FileStorage>,
    user: AuthenticatedUser,
    payload: Multipart,
) -> Result<impl Responder, GalleryError> {
    let upload = read_photo_field(payload, storage.max_bytes()).await?;
    let photo = PhotoService::create_photo(store.get_ref(), storage.get_ref(), user.0, upload).await?;
    Ok(HttpResponse::Created().json(photo))
}

/// POST /photo/commentsOfPhoto/{photo_id}
/// Add a comment by the caller and return the enriched photo
pub async fn add_comment(
    store: web::Data<dyn PhotoStore>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<CreateCommentRequest>,
) -> Result<impl Responder, GalleryError> {
    let photo =
        CommentService::add_comment(store.get_ref(), &path.into_inner(), user.0, &req.comment)
            .await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// Pull the `photo` part out of a multipart body
/// DOCUMENTATION: Other fields are drained and ignored. A body that fails to
/// parse before any part was read, or a `photo` part without a file name,
/// counts as carrying no file.
async fn read_photo_field(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<Option<UploadedImage>, GalleryError> {
    let mut parts_read = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) if parts_read == 0 => {
                log::warn!("Unreadable multipart upload: {}", e);
                return Ok(None);
            }
            Err(e) => {
                return Err(GalleryError::InvalidArgument(format!(
                    "Malformed upload: {}",
                    e
                )));
            }
        };
        parts_read += 1;

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let is_photo = field.name() == Some(PHOTO_FIELD) && original_name.is_some();
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| {
                GalleryError::InvalidArgument(format!("Upload read error: {}", e))
            })?;
            if is_photo {
                if bytes.len() + data.len() > max_bytes {
                    return Err(GalleryError::InvalidArgument("File too large".to_string()));
                }
                bytes.extend_from_slice(&data);
            }
        }

        if is_photo {
            return Ok(Some(UploadedImage {
                original_name: original_name.unwrap_or_default(),
                content_type,
                bytes,
            }));
        }
    }

    Ok(None)
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/photo")
            .route("/new", web::post().to(upload_photo))
            .route("/photosOfUser/{id}", web::get().to(photos_of_user))
            .route("/commentsOfPhoto/{photo_id}", web::post().to(add_comment))
            .route("/{id}", web::get().to(photos_of_user_authenticated)),
    );
}
