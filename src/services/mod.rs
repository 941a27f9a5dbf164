// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod comment_service;
pub mod enrichment;
pub mod file_storage;
pub mod photo_service;
pub mod user_service;

pub use comment_service::*;
pub use file_storage::*;
pub use photo_service::*;
pub use user_service::*;
