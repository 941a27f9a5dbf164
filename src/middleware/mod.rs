// src/middleware/mod.rs
// DOCUMENTATION: Request middleware and extractors

pub mod auth;

pub use auth::AuthenticatedUser;
