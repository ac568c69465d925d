//! User domain models and parameters.

use crate::{
    model::user::{SignUpDto, UserDto},
    server::error::AppError,
};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone_number: String,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone_number: self.phone_number,
        }
    }

    /// Converts an entity model at the repository boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            phone_number: entity.phone_number,
        }
    }
}

/// User together with the stored PHC password hash, only used while logging in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Validated sign-up request with the plain text password still unhashed.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub email: String,
    pub name: String,
    pub password: String,
    pub phone_number: String,
}

impl SignUpParams {
    /// Validates the sign-up request.
    ///
    /// # Returns
    /// - `Ok(SignUpParams)` - All fields present, email contains `@`, password long enough
    /// - `Err(AppError::BadRequest)` - A field failed validation
    pub fn from_dto(dto: SignUpDto) -> Result<Self, AppError> {
        let email = dto.email.trim().to_string();

        if !email.contains('@') {
            return Err(AppError::BadRequest("Email address is invalid".to_string()));
        }
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }
        if dto.phone_number.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Phone number must not be empty".to_string(),
            ));
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            email,
            name: dto.name,
            password: dto.password,
            phone_number: dto.phone_number,
        })
    }
}

/// User row ready for insertion, carrying the password hash.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub phone_number: String,
}
