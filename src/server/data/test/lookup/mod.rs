use crate::server::{
    data::{
        amenity::AmenityRepository, category::CategoryRepository,
        venue_type::VenueTypeRepository,
    },
    model::amenity::{CreateAmenityParams, UpdateAmenityParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod amenity;
mod category;
mod venue_type;
