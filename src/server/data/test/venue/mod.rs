use std::collections::BTreeSet;

use crate::server::{
    data::venue::VenueRepository,
    model::{
        date_range::DateRange,
        geo::{BoundingBox, Coordinates},
        venue::{CreateVenueParams, Location, UpdateVenueDetailsParams},
        venue_filter::VenueFilter,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date, venue::VenueFactory},
};

mod create;
mod delete;
mod find_with_filters;
mod get_by_id;
mod update;
