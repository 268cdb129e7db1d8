// ABOUTME: User account model for authentication and result ownership
// ABOUTME: Password hash never leaves the server through serialization

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Login email, unique
    pub email: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    /// Optional display name
    pub full_name: Option<String>,
    /// Disabled accounts cannot obtain or use tokens
    pub disabled: bool,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, enabled user
    #[must_use]
    pub fn new(email: String, hashed_password: String, full_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            hashed_password,
            full_name,
            disabled: false,
            created_at: Utc::now(),
        }
    }
}
