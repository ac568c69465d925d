//! Services for the lookup tables venues are described with: venue types, amenity
//! categories, amenities and occasions.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        amenity::AmenityRepository, category::CategoryRepository, occasion::OccasionRepository,
        venue_type::VenueTypeRepository,
    },
    error::{store::StoreViolation, AppError},
    model::{
        amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams},
        category::Category,
        occasion::{CreateOccasionParams, Occasion, UpdateOccasionParams},
        venue_type::VenueType,
    },
};

pub struct VenueTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<VenueType>, AppError> {
        Ok(VenueTypeRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VenueType, AppError> {
        VenueTypeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Venue type", id))
    }

    pub async fn create(&self, name: String) -> Result<VenueType, AppError> {
        Ok(VenueTypeRepository::new(self.db).create(name).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !VenueTypeRepository::new(self.db).delete(id).await? {
            return Err(not_found("Venue type", id));
        }

        Ok(())
    }
}

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Category", id))
    }

    pub async fn create(&self, name: String) -> Result<Category, AppError> {
        Ok(CategoryRepository::new(self.db).create(name).await?)
    }

    pub async fn update(&self, id: i32, name: String) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .update(id, name)
            .await?
            .ok_or_else(|| not_found("Category", id))
    }

    /// Deletes a category together with its amenities.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(not_found("Category", id));
        }

        Ok(())
    }
}

pub struct AmenityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Amenity>, AppError> {
        Ok(AmenityRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Amenity, AppError> {
        AmenityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Amenity", id))
    }

    pub async fn create(&self, params: CreateAmenityParams) -> Result<Amenity, AppError> {
        AmenityRepository::new(self.db)
            .create(params)
            .await
            .map_err(|err| missing_reference(err, "Category not found"))
    }

    pub async fn update(&self, params: UpdateAmenityParams) -> Result<Amenity, AppError> {
        let id = params.id;

        AmenityRepository::new(self.db)
            .update(params)
            .await
            .map_err(|err| missing_reference(err, "Category not found"))?
            .ok_or_else(|| not_found("Amenity", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AmenityRepository::new(self.db).delete(id).await? {
            return Err(not_found("Amenity", id));
        }

        Ok(())
    }
}

pub struct OccasionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OccasionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Occasion>, AppError> {
        Ok(OccasionRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Occasion, AppError> {
        OccasionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Occasion", id))
    }

    /// Creates an occasion and its amenity links atomically.
    pub async fn create(&self, params: CreateOccasionParams) -> Result<Occasion, AppError> {
        let txn = self.db.begin().await?;
        let occasion = OccasionRepository::new(&txn)
            .create(params)
            .await
            .map_err(|err| missing_reference(err, "Amenity not found"))?;
        txn.commit().await?;

        Ok(occasion)
    }

    /// Renames an occasion and/or replaces its amenity set atomically.
    pub async fn update(&self, params: UpdateOccasionParams) -> Result<Occasion, AppError> {
        let id = params.id;

        let txn = self.db.begin().await?;
        let occasion = OccasionRepository::new(&txn)
            .update(params)
            .await
            .map_err(|err| missing_reference(err, "Amenity not found"))?
            .ok_or_else(|| not_found("Occasion", id))?;
        txn.commit().await?;

        Ok(occasion)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !OccasionRepository::new(self.db).delete(id).await? {
            return Err(not_found("Occasion", id));
        }

        Ok(())
    }
}

fn not_found(kind: &str, id: i32) -> AppError {
    AppError::NotFound(format!("{} with ID {} not found", kind, id))
}

fn missing_reference(err: DbErr, message: &str) -> AppError {
    match StoreViolation::classify(&err) {
        Some(StoreViolation::ForeignKey) => AppError::NotFound(message.to_string()),
        _ => err.into(),
    }
}
