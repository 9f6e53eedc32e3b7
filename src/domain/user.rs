//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Password;
use crate::errors::AppResult;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique across all users
    pub email: String,
    pub avatar_path: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user without a password; call `set_password` before saving.
    pub fn new(email: String, name: String, avatar_path: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            avatar_path: avatar_path.unwrap_or_default(),
            name,
            password_hash: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Hash `plain_text` with the application salt and store it.
    pub fn set_password(&mut self, plain_text: &str, salt: &str) -> AppResult<()> {
        self.password_hash = Password::new(plain_text, salt)?.into_string();
        Ok(())
    }

    /// Stored password hash.
    pub fn password(&self) -> &str {
        &self.password_hash
    }

    /// Check a plain text password against the stored hash.
    pub fn verify_password(&self, plain_text: &str, salt: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(plain_text, salt)
    }
}

/// Profile fields a user may change about themselves
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub avatar_path: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar_path.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "keks@htmlacademy.ru")]
    pub email: String,
    /// User display name
    #[schema(example = "Keks")]
    pub name: String,
    /// Avatar image path (empty when unset)
    #[schema(example = "avatar.jpg")]
    pub avatar_path: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            avatar_path: user.avatar_path,
            created_at: user.created_at,
        }
    }
}

/// Public author shown next to comments
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    pub id: Uuid,
    #[schema(example = "Keks")]
    pub name: String,
    pub avatar_path: String,
}

impl From<User> for AuthorResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            avatar_path: user.avatar_path,
        }
    }
}
