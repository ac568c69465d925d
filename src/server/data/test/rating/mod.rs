use crate::server::{data::rating::RatingRepository, model::rating::CreateRatingParams};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date},
};

mod average_score_for_venue;
mod create;
mod get_by_venue;
