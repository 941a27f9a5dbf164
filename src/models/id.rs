// src/models/id.rs
// DOCUMENTATION: Identifier parsing for path parameters

use crate::errors::GalleryError;
use uuid::Uuid;

/// Parse a raw path segment as a record id
/// DOCUMENTATION: `kind` names the record in the 400 message ("Invalid user id")
pub fn parse_id(raw: &str, kind: &str) -> Result<Uuid, GalleryError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        log::debug!("Rejected malformed {} id: {:?}", kind, raw);
        GalleryError::InvalidArgument(format!("Invalid {} id", kind))
    })
}
