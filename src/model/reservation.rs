use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub venue_id: i32,
    pub user_id: i32,
    pub date_start: NaiveDate,
    /// Checkout day, not occupied by the stay.
    pub date_end: NaiveDate,
    pub is_pending_rating: bool,
}

/// The guest is taken from the session.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateReservationDto {
    pub venue_id: i32,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub available: bool,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// First night of the proposed stay.
    pub from: NaiveDate,
    /// Checkout day of the proposed stay.
    pub to: NaiveDate,
}
