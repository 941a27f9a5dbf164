// src/models/comment.rs
// DOCUMENTATION: Request body for POST /photo/commentsOfPhoto/{photo_id}

use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const EMPTY_COMMENT_MESSAGE: &str = "Comment cannot be empty";

/// Request DTO for adding a comment
/// A missing `comment` field deserializes as empty and fails validation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub comment: String,
}

/// Shared with the comment service so the body is checked the same way everywhere
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(EMPTY_COMMENT_MESSAGE.into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_comment_fails_validation() {
        let req: CreateCommentRequest = serde_json::from_str(r#"{"comment":"  \n\t"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_comment_fails_validation() {
        let req: CreateCommentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.comment, "");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_comment_with_text_passes() {
        let req: CreateCommentRequest = serde_json::from_str(r#"{"comment":" nice shot "}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
