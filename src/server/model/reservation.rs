//! Reservation domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto},
    server::{error::AppError, model::date_range::DateRange},
};

/// A guest's stay at a venue.
///
/// While `is_pending_rating` is true the stay is active: it blocks its dates for other
/// guests. Submitting a rating releases it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub venue_id: i32,
    pub user_id: i32,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub is_pending_rating: bool,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            venue_id: self.venue_id,
            user_id: self.user_id,
            date_start: self.date_start,
            date_end: self.date_end,
            is_pending_rating: self.is_pending_rating,
        }
    }

    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            venue_id: entity.venue_id,
            user_id: entity.user_id,
            date_start: entity.date_start,
            date_end: entity.date_end,
            is_pending_rating: entity.is_pending_rating,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub venue_id: i32,
    pub user_id: i32,
    pub dates: DateRange,
}

impl CreateReservationParams {
    /// Builds parameters for the session's user, validating the date order.
    pub fn from_dto(user_id: i32, dto: CreateReservationDto) -> Result<Self, AppError> {
        Ok(Self {
            venue_id: dto.venue_id,
            user_id,
            dates: DateRange::new(dto.date_start, dto.date_end)?,
        })
    }
}
