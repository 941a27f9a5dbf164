// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod comment;
pub mod id;
pub mod photo;
pub mod user;

pub use comment::*;
pub use id::*;
pub use photo::*;
pub use user::*;
