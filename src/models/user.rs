// src/models/user.rs
// DOCUMENTATION: User records and their API projections
// PURPOSE: Detailed profile for GET /user/{id}, summary for lists and comment authors

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user profile
/// DOCUMENTATION: Maps to the users table; serialized as-is by GET /user/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub description: String,
    pub occupation: String,
}

/// Minimal projection used by the user list and comment enrichment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
