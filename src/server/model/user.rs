//! User domain models and parameters.

use crate::model::user::UserDto;

/// Application user with credentials.
///
/// `password_hash` is an Argon2id PHC string for accounts created through
/// signup. Accounts created through Google login store the Google subject id
/// instead, which never verifies as a password.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Converts the domain model to a DTO, dropping the credential column.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
        }
    }
}

/// Parameters for creating a user row, credentials already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Raw signup form input, password still in plaintext.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Outcome of a signup attempt that is not an infrastructure error.
///
/// Rejections are business outcomes surfaced to the user as flash messages,
/// not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    Created(User),
    DuplicateUsername,
    EmailNotAllowed,
}
