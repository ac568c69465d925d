use crate::{model::venue_type::VenueTypeDto, server::error::AppError};

#[derive(Debug, Clone, PartialEq)]
pub struct VenueType {
    pub id: i32,
    pub name: String,
}

impl VenueType {
    pub fn into_dto(self) -> VenueTypeDto {
        VenueTypeDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::venue_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Trims a lookup name and rejects blank ones.
///
/// Shared by venue types, categories, amenities and occasions.
pub fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    Ok(name.to_string())
}
