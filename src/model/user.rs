use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SignUpDto {
    pub email: String,
    pub name: String,
    /// At least 8 characters.
    pub password: String,
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LogInDto {
    pub email: String,
    pub password: String,
}
