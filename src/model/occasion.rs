use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OccasionDto {
    pub id: i32,
    pub name: String,
    /// Amenities suggested for this occasion, ascending.
    pub amenity_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOccasionDto {
    pub name: String,
    #[serde(default)]
    pub amenity_ids: Vec<i32>,
}

/// Partial update; a present `amenity_ids` replaces the whole set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateOccasionDto {
    pub name: Option<String>,
    pub amenity_ids: Option<Vec<i32>>,
}
