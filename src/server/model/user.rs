use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// A registered account, without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The password hash stays behind in the entity.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    /// Trimmed and lowercased.
    pub email: String,
    pub password: String,
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
