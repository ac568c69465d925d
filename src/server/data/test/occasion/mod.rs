use std::collections::BTreeSet;

use crate::server::{
    data::occasion::OccasionRepository,
    model::occasion::{CreateOccasionParams, UpdateOccasionParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_amenity_ids_for_occasions;
mod update;
