use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{user::UserRepository, venue::VenueRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// The user owns the venue with this ID.
    VenueOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission.
    ///
    /// An empty permission list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is logged in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The session user was deleted
    /// - `Err(AppError::NotFound)` - A permission names a venue that does not exist
    /// - `Err(AppError::Forbidden)` - The user lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::VenueOwner(venue_id) => {
                    let owner_id = VenueRepository::new(self.db)
                        .get_owner_id(*venue_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!("Venue with ID {} not found", venue_id))
                        })?;

                    if owner_id != user.id {
                        tracing::debug!(
                            "User {} attempted to modify venue {} owned by {}",
                            user.id,
                            venue_id,
                            owner_id
                        );
                        return Err(AppError::Forbidden(
                            "Only the venue owner can modify this venue".to_string(),
                        ));
                    }
                }
            }
        }

        Ok(user)
    }
}
