use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AmenityDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAmenityDto {
    pub name: String,
    pub category_id: i32,
}

/// Partial update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateAmenityDto {
    pub name: Option<String>,
    pub category_id: Option<i32>,
}
