// src/services/enrichment.rs
// DOCUMENTATION: Comment-thread enrichment
// PURPOSE: Attach a live author summary to every comment of a set of photos

use crate::db::PhotoStore;
use crate::models::{Photo, PhotoResponse, CommentResponse, UserSummary};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Resolve comment authors for `photos` with a single batched lookup
/// DOCUMENTATION: Distinct author ids across all photos are fetched once.
/// Authors that no longer exist, or a failed lookup, yield `user: null`
/// instead of failing the request. Photo and comment order are preserved.
pub async fn enrich_photos(store: &dyn PhotoStore, photos: Vec<Photo>) -> Vec<PhotoResponse> {
    let author_ids = distinct_author_ids(&photos);

    let authors: HashMap<Uuid, UserSummary> = if author_ids.is_empty() {
        HashMap::new()
    } else {
        match store.find_user_summaries(&author_ids).await {
            Ok(users) => users.into_iter().map(|u| (u.id, u)).collect(),
            Err(e) => {
                log::warn!(
                    "Author lookup failed for {} users, returning comments without authors: {}",
                    author_ids.len(),
                    e
                );
                HashMap::new()
            }
        }
    };

    log::debug!(
        "Enriched {} photos using {} distinct authors ({} found)",
        photos.len(),
        author_ids.len(),
        authors.len()
    );

    photos
        .into_iter()
        .map(|photo| attach_authors(photo, &authors))
        .collect()
}

/// Enrich a single photo
pub async fn enrich_photo(store: &dyn PhotoStore, photo: Photo) -> PhotoResponse {
    let mut enriched = enrich_photos(store, vec![photo]).await;
    // enrich_photos yields exactly one response per input photo
    enriched.remove(0)
}

/// Distinct author ids in first-seen order
fn distinct_author_ids(photos: &[Photo]) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    photos
        .iter()
        .flat_map(|p| p.comments.iter())
        .map(|c| c.user_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

fn attach_authors(photo: Photo, authors: &HashMap<Uuid, UserSummary>) -> PhotoResponse {
    PhotoResponse {
        id: photo.id,
        user_id: photo.user_id,
        file_name: photo.file_name,
        date_time: photo.date_time,
        comments: photo
            .comments
            .into_iter()
            .map(|c| CommentResponse {
                user: authors.get(&c.user_id).cloned(),
                id: c.id,
                comment: c.comment,
                date_time: c.date_time,
            })
            .collect(),
    }
}
