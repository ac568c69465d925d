use sea_orm::DatabaseConnection;

use crate::server::{
    data::favourite::FavouriteRepository,
    error::{store::StoreViolation, AppError},
    model::favourite::Favourite,
};

const ALREADY_FAVOURITE: &str = "Venue is already a favourite";

pub struct FavouriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavouriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bookmarks a venue for a user.
    ///
    /// # Returns
    /// - `Ok(Favourite)` - The created favourite
    /// - `Err(AppError::NotFound)` - The venue or user does not exist
    /// - `Err(AppError::Conflict)` - The user already bookmarked the venue
    pub async fn create(&self, venue_id: i32, user_id: i32) -> Result<Favourite, AppError> {
        let repo = FavouriteRepository::new(self.db);

        if repo.exists(venue_id, user_id).await? {
            return Err(AppError::Conflict(ALREADY_FAVOURITE.to_string()));
        }

        repo.create(venue_id, user_id)
            .await
            .map_err(|err| match StoreViolation::classify(&err) {
                Some(StoreViolation::ForeignKey) => {
                    AppError::NotFound("Venue or user not found".to_string())
                }
                Some(StoreViolation::Unique) => AppError::Conflict(ALREADY_FAVOURITE.to_string()),
                _ => err.into(),
            })
    }

    pub async fn get_all(&self) -> Result<Vec<Favourite>, AppError> {
        Ok(FavouriteRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Favourite, AppError> {
        FavouriteRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| favourite_not_found(id))
    }

    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Favourite>, AppError> {
        Ok(FavouriteRepository::new(self.db)
            .get_by_venue(venue_id)
            .await?)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favourite>, AppError> {
        Ok(FavouriteRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FavouriteRepository::new(self.db).delete(id).await? {
            return Err(favourite_not_found(id));
        }

        Ok(())
    }
}

fn favourite_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Favourite with ID {} not found", id))
}
