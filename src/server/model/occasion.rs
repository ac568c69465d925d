//! Occasion domain models and parameters.
//!
//! An occasion such as "Wedding" or "Team offsite" suggests a set of amenities. Venue
//! searches by occasion are expanded into searches by those amenities.

use std::collections::BTreeSet;

use crate::{
    model::occasion::{CreateOccasionDto, OccasionDto, UpdateOccasionDto},
    server::{error::AppError, model::venue_type::validate_name},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Occasion {
    pub id: i32,
    pub name: String,
    /// Suggested amenities, ascending.
    pub amenity_ids: Vec<i32>,
}

impl Occasion {
    pub fn into_dto(self) -> OccasionDto {
        OccasionDto {
            id: self.id,
            name: self.name,
            amenity_ids: self.amenity_ids,
        }
    }

    pub fn from_entity(entity: entity::occasion::Model, mut amenity_ids: Vec<i32>) -> Self {
        amenity_ids.sort_unstable();

        Self {
            id: entity.id,
            name: entity.name,
            amenity_ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOccasionParams {
    pub name: String,
    pub amenity_ids: BTreeSet<i32>,
}

impl CreateOccasionParams {
    pub fn from_dto(dto: CreateOccasionDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            amenity_ids: dto.amenity_ids.into_iter().collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateOccasionParams {
    pub id: i32,
    pub name: Option<String>,
    /// Replaces the whole set when present.
    pub amenity_ids: Option<BTreeSet<i32>>,
}

impl UpdateOccasionParams {
    pub fn from_dto(id: i32, dto: UpdateOccasionDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name.as_deref().map(validate_name).transpose()?,
            amenity_ids: dto.amenity_ids.map(|ids| ids.into_iter().collect()),
        })
    }
}
