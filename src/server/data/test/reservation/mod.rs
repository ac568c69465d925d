use crate::server::{
    data::reservation::ReservationRepository,
    model::{date_range::DateRange, reservation::CreateReservationParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date, reservation::ReservationFactory},
};

mod create;
mod get_by_venue;
mod has_overlap;
mod set_pending_rating;
