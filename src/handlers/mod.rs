// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod photos;
pub mod users;

use crate::errors::GalleryError;
use actix_web::web;

pub use health::config as health_config;
pub use photos::config as photos_config;
pub use users::config as users_config;

/// JSON extractor settings
/// DOCUMENTATION: Body parse failures use the same `{"error": ...}` shape as every other error
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| GalleryError::InvalidArgument(err.to_string()).into())
}
