// src/db/postgres.rs
// DOCUMENTATION: PostgreSQL implementation of PhotoStore
// PURPOSE: All SQL lives here; comments are an embedded JSONB array on photos

use crate::db::PhotoStore;
use crate::errors::GalleryError;
use crate::models::{Comment, Photo, User, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Internal struct for mapping photo rows
/// DOCUMENTATION: Decodes the JSONB comment array into Vec<Comment>
#[derive(Debug, FromRow)]
struct PhotoRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub date_time: DateTime<Utc>,
    pub comments: Json<Vec<Comment>>,
}

impl PhotoRow {
    fn into_photo(self) -> Photo {
        Photo {
            id: self.id,
            user_id: self.user_id,
            file_name: self.file_name,
            date_time: self.date_time,
            comments: self.comments.0,
        }
    }
}

/// PgStore: All database operations for users and photos
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoStore for PgStore {
    async fn list_users(&self) -> Result<Vec<UserSummary>, GalleryError> {
        sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT id, first_name, last_name
            FROM users
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list users: {}", e);
            GalleryError::DatabaseError(format!("List users failed: {}", e))
        })
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, GalleryError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, location, description, occupation
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user {}: {}", id, e);
            GalleryError::DatabaseError(format!("Fetch user failed: {}", e))
        })
    }

    async fn find_user_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, GalleryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT id, first_name, last_name
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch {} comment authors: {}", ids.len(), e);
            GalleryError::DatabaseError(format!("Fetch users failed: {}", e))
        })
    }

    async fn insert_photo(&self, photo: &Photo) -> Result<Photo, GalleryError> {
        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
            INSERT INTO photos (id, user_id, file_name, date_time, comments)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, file_name, date_time, comments
            "#,
        )
        .bind(photo.id)
        .bind(photo.user_id)
        .bind(&photo.file_name)
        .bind(photo.date_time)
        .bind(Json(&photo.comments))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create photo: {}", e);
            GalleryError::DatabaseError(format!("Create photo failed: {}", e))
        })?;

        Ok(row.into_photo())
    }

    async fn photos_by_owner(&self, user_id: Uuid) -> Result<Vec<Photo>, GalleryError> {
        let rows = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT id, user_id, file_name, date_time, comments
            FROM photos
            WHERE user_id = $1
            ORDER BY date_time ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photos for user {}: {}", user_id, e);
            GalleryError::DatabaseError(format!("Fetch photos failed: {}", e))
        })?;

        Ok(rows.into_iter().map(PhotoRow::into_photo).collect())
    }

    async fn append_comment(
        &self,
        photo_id: Uuid,
        comment: &Comment,
    ) -> Result<Option<Photo>, GalleryError> {
        // Single-statement append: concurrent writers each land their element.
        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
            UPDATE photos
            SET comments = comments || $2::jsonb
            WHERE id = $1
            RETURNING id, user_id, file_name, date_time, comments
            "#,
        )
        .bind(photo_id)
        .bind(Json([comment]))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to append comment to photo {}: {}", photo_id, e);
            GalleryError::DatabaseError(format!("Append comment failed: {}", e))
        })?;

        Ok(row.map(PhotoRow::into_photo))
    }
}
