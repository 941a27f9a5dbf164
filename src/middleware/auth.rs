// src/middleware/auth.rs
// DOCUMENTATION: Authenticated identity extractor
// PURPOSE: Read the user identity the upstream gateway attaches to each request

use crate::config::Config;
use crate::errors::GalleryError;
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const GATEWAY_TOKEN_HEADER: &str = "X-Gateway-Token";

/// Identity of the caller on authenticated routes
/// DOCUMENTATION: Add as a handler argument to require authentication
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequest for AuthenticatedUser {
    type Error = GalleryError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, GalleryError> {
    if let Some(config) = req.app_data::<web::Data<Config>>() {
        verify_gateway_token(req, &config.gateway_token)?;
    }

    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Request to {} without user identity", req.path());
            GalleryError::Unauthorized
        })?;

    Uuid::parse_str(user_id.trim())
        .map(AuthenticatedUser)
        .map_err(|_| {
            log::warn!("Request to {} with malformed user identity", req.path());
            GalleryError::Unauthorized
        })
}

/// Checks X-Gateway-Token against the configured token, when one is configured
fn verify_gateway_token(req: &HttpRequest, expected: &str) -> Result<(), GalleryError> {
    if expected.is_empty() {
        return Ok(());
    }

    let token = req
        .headers()
        .get(GATEWAY_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Authenticated request without gateway token");
            GalleryError::Unauthorized
        })?;

    if token != expected {
        log::warn!("Authenticated request with invalid gateway token");
        return Err(GalleryError::Forbidden);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use actix_web::test::TestRequest;

    #[test]
    fn test_valid_identity() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, id.to_string()))
            .to_http_request();
        assert_eq!(authenticate(&req).unwrap(), AuthenticatedUser(id));
    }

    #[test]
    fn test_missing_or_malformed_identity() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(authenticate(&req), Err(GalleryError::Unauthorized)));

        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "admin"))
            .to_http_request();
        assert!(matches!(authenticate(&req), Err(GalleryError::Unauthorized)));
    }

    #[test]
    fn test_gateway_token_enforced_when_configured() {
        let mut config = test_config("./images".into());
        config.gateway_token = "s3cret".to_string();
        let id = Uuid::new_v4().to_string();

        let missing = TestRequest::default()
            .app_data(web::Data::new(config.clone()))
            .insert_header((USER_ID_HEADER, id.as_str()))
            .to_http_request();
        assert!(matches!(authenticate(&missing), Err(GalleryError::Unauthorized)));

        let wrong = TestRequest::default()
            .app_data(web::Data::new(config.clone()))
            .insert_header((USER_ID_HEADER, id.as_str()))
            .insert_header((GATEWAY_TOKEN_HEADER, "nope"))
            .to_http_request();
        assert!(matches!(authenticate(&wrong), Err(GalleryError::Forbidden)));

        let ok = TestRequest::default()
            .app_data(web::Data::new(config))
            .insert_header((USER_ID_HEADER, id.as_str()))
            .insert_header((GATEWAY_TOKEN_HEADER, "s3cret"))
            .to_http_request();
        assert!(authenticate(&ok).is_ok());
    }
}
