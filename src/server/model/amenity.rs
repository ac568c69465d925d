use crate::{
    model::amenity::{AmenityDto, CreateAmenityDto, UpdateAmenityDto},
    server::{error::AppError, model::venue_type::validate_name},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

impl Amenity {
    pub fn into_dto(self) -> AmenityDto {
        AmenityDto {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
        }
    }

    pub fn from_entity(entity: entity::amenity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category_id: entity.category_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAmenityParams {
    pub name: String,
    pub category_id: i32,
}

impl CreateAmenityParams {
    pub fn from_dto(dto: CreateAmenityDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            category_id: dto.category_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAmenityParams {
    pub id: i32,
    pub name: Option<String>,
    pub category_id: Option<i32>,
}

impl UpdateAmenityParams {
    pub fn from_dto(id: i32, dto: UpdateAmenityDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name.as_deref().map(validate_name).transpose()?,
            category_id: dto.category_id,
        })
    }
}
