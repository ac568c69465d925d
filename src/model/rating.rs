use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RatingDto {
    pub id: i32,
    pub score: i32,
    pub review: Option<String>,
    pub reservation_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRatingDto {
    pub reservation_id: i32,
    /// Between 1 and 5 inclusive.
    pub score: i32,
    pub review: Option<String>,
}
