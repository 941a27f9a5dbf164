// src/models/photo.rs
// DOCUMENTATION: Photo records with their embedded comment thread
// PURPOSE: Storage shape (Photo, Comment) and enriched API shape (PhotoResponse)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserSummary;

/// Comment embedded in a photo
/// DOCUMENTATION: Stored inside photos.comments (JSONB); never a standalone row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub comment: String,
    pub user_id: Uuid,
    pub date_time: DateTime<Utc>,
}

impl Comment {
    /// New comment authored now
    pub fn new(user_id: Uuid, body: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            comment: body.to_string(),
            user_id,
            date_time: Utc::now(),
        }
    }
}

/// Uploaded photo
/// DOCUMENTATION: `user_id` is fixed at creation; `comments` only grows, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub date_time: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl Photo {
    /// Photo uploaded now by `user_id`, with no comments
    pub fn new(user_id: Uuid, file_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            file_name,
            date_time: Utc::now(),
            comments: Vec::new(),
        }
    }
}

/// Comment with its author resolved
/// `user` is None when the author record no longer exists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub comment: String,
    pub date_time: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

/// Photo DTO for listing and comment endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub date_time: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
}
