//! Password authentication.
//!
//! Passwords are hashed with argon2 into PHC strings and only compared through
//! `PasswordVerifier`. Session handling stays in the controller; this service only
//! decides who the credentials belong to.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, store::StoreViolation, AppError},
    model::user::{CreateUserParams, SignUpParams, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError::AuthErr(PasswordHash))` - Hashing failed
    pub async fn sign_up(&self, params: SignUpParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                email: params.email,
                name: params.name,
                password_hash,
                phone_number: params.phone_number,
            })
            .await
            .map_err(|err| match StoreViolation::classify(&err) {
                Some(StoreViolation::Unique) => {
                    AppError::Conflict("Email already exists".to_string())
                }
                _ => err.into(),
            })?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - The password matches the account's hash
    /// - `Err(AppError::AuthErr(WrongCredentials))` - Unknown email or wrong password
    pub async fn log_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::WrongCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AuthError::WrongCredentials.into());
        }

        Ok(credentials.user)
    }
}

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::PasswordHash(err.to_string()))
}

/// Checks a password against a stored PHC string.
///
/// A malformed stored hash is an error rather than a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|err| AuthError::PasswordHash(err.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
