use std::collections::{BTreeSet, HashMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        date_range::DateRange,
        geo::Coordinates,
        rating::CreateRatingParams,
        reservation::CreateReservationParams,
        user::SignUpParams,
        venue::{CreateVenueParams, Location},
        venue_filter::{SearchArea, VenueFilterParams},
    },
    service::{
        auth::AuthService, favourite::FavouriteService, geocoder::Geocoder,
        lookup::OccasionService, rating::RatingService, reservation::ReservationService,
        venue::VenueService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date, reservation::ReservationFactory, venue::VenueFactory},
};


/// Geocoder answering from a fixed address table.
#[derive(Default)]
struct StubGeocoder {
    places: HashMap<String, Coordinates>,
    failing: bool,
}

impl StubGeocoder {
    fn with_place(mut self, address: &str, latitude: f64, longitude: f64) -> Self {
        self.places.insert(
            address.to_string(),
            Coordinates {
                latitude,
                longitude,
            },
        );
        self
    }

    fn failing() -> Self {
        Self {
            places: HashMap::new(),
            failing: true,
        }
    }
}

impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, AppError> {
        if self.failing {
            return Err(AppError::InternalError("geocoder unavailable".to_string()));
        }

        Ok(self.places.get(address).copied())
    }
}

fn stay(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
}
