use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavouriteDto {
    pub id: i32,
    pub venue_id: i32,
    pub user_id: i32,
}

/// The user is taken from the session.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateFavouriteDto {
    pub venue_id: i32,
}
