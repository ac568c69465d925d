//! Venue search parameters.
//!
//! A search moves through two stages. [`VenueFilterParams`] is the validated query
//! string: id lists parsed and paired fields checked. The venue service then resolves
//! occasions into amenities and the search area into a bounding box, producing the
//! [`VenueFilter`] the repository turns into SQL conditions.

use std::collections::BTreeSet;

use crate::{
    model::venue::VenueFilterQuery,
    server::{
        error::AppError,
        model::{
            date_range::DateRange,
            geo::{BoundingBox, Coordinates},
        },
    },
};

/// Where a radius search is centred.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchArea {
    /// Explicit coordinates from the query.
    Around { center: Coordinates, radius_km: f64 },
    /// A city name still to be geocoded.
    City { city: String, radius_km: f64 },
}

/// Validated venue search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueFilterParams {
    pub amenity_ids: BTreeSet<i32>,
    pub occasion_ids: BTreeSet<i32>,
    pub venue_type_id: Option<i32>,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
    pub guests: Option<i32>,
    pub date_range: Option<DateRange>,
    pub area: Option<SearchArea>,
    /// Exact city match, only set when no radius is given.
    pub city: Option<String>,
}

impl VenueFilterParams {
    pub fn from_query(query: VenueFilterQuery) -> Result<Self, AppError> {
        let amenity_ids = parse_id_list("amenities", query.amenities.as_deref())?;
        let occasion_ids = parse_id_list("occasions", query.occasions.as_deref())?;

        let date_range = match (query.date_start, query.date_end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "date_start and date_end must be given together".to_string(),
                ))
            }
        };

        if query.min_price.is_some_and(|price| price < 0)
            || query.max_price.is_some_and(|price| price < 0)
        {
            return Err(AppError::BadRequest(
                "min_price and max_price must not be negative".to_string(),
            ));
        }

        if query.guests.is_some_and(|guests| guests < 1) {
            return Err(AppError::BadRequest("guests must be at least 1".to_string()));
        }

        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(AppError::BadRequest(
                    "min_price must not exceed max_price".to_string(),
                ));
            }
        }

        let city = query
            .city
            .map(|city| city.trim().to_string())
            .filter(|city| !city.is_empty());

        let center = match (query.latitude, query.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "latitude and longitude must be given together".to_string(),
                ))
            }
        };

        let (area, city) = match (query.radius_km, center, city) {
            (Some(radius_km), center, city) => {
                if !radius_km.is_finite() || radius_km < 0.0 {
                    return Err(AppError::BadRequest(
                        "radius_km must be a non-negative number".to_string(),
                    ));
                }
                match (center, city) {
                    (Some(center), _) => (Some(SearchArea::Around { center, radius_km }), None),
                    (None, Some(city)) => (Some(SearchArea::City { city, radius_km }), None),
                    (None, None) => {
                        return Err(AppError::BadRequest(
                            "radius_km requires latitude and longitude or city".to_string(),
                        ))
                    }
                }
            }
            (None, Some(_), _) => {
                return Err(AppError::BadRequest(
                    "latitude and longitude require radius_km".to_string(),
                ))
            }
            (None, None, city) => (None, city),
        };

        Ok(Self {
            amenity_ids,
            occasion_ids,
            venue_type_id: query.venue_type_id,
            min_price: query.min_price,
            max_price: query.max_price,
            guests: query.guests,
            date_range,
            area,
            city,
        })
    }
}

/// Fully resolved search, every present field narrowing the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueFilter {
    /// Union of requested amenities and those suggested by requested occasions.
    pub amenity_ids: BTreeSet<i32>,
    pub venue_type_id: Option<i32>,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
    pub guests: Option<i32>,
    /// Venues with an active reservation overlapping these dates are excluded.
    pub date_range: Option<DateRange>,
    pub bounding_box: Option<BoundingBox>,
    pub city: Option<String>,
}

/// Parses a comma separated id list such as `1,2,3`.
///
/// Blank entries are skipped so `1,,2` and a trailing comma are accepted.
fn parse_id_list(field: &str, value: Option<&str>) -> Result<BTreeSet<i32>, AppError> {
    let Some(value) = value else {
        return Ok(BTreeSet::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>().map_err(|_| {
                AppError::BadRequest(format!("{} contains an invalid id: {}", field, part))
            })
        })
        .collect()
}
