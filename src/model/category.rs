use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

/// Body for both creating and renaming a category.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCategoryDto {
    pub name: String,
}
