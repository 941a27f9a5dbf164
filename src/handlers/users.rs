// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for the user directory
// PURPOSE: Parse requests, call services, return responses

use crate::db::PhotoStore;
use crate::errors::GalleryError;
use crate::services::UserService;
use actix_web::{web, HttpResponse, Responder};

/// GET /user/list
/// Minimal info for every user
pub async fn list_users(store: web::Data<dyn PhotoStore>) -> Result<impl Responder, GalleryError> {
    let users = UserService::list_users(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /user/{id}
/// Detailed profile
pub async fn get_user(
    store: web::Data<dyn PhotoStore>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let user = UserService::get_user(store.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("/list", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user)),
    );
}
