use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::amenity::AmenityDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VenueDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_per_night_in_eur_cent: i32,
    pub rating: f64,
    pub capacity: i32,
    pub amount_of_beds: i32,
    pub extra_sleeping_details: String,
    pub check_in_hour: i32,
    pub check_out_hour: i32,
    pub distance_from_city_center_in_meters: i32,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub location: LocationDto,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: i32,
    pub venue_type_id: Option<i32>,
    pub amenities: Vec<AmenityDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LocationDto {
    pub street_number: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

/// The owner is taken from the session.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateVenueDto {
    pub name: String,
    pub description: String,
    pub price_per_night_in_eur_cent: i32,
    pub capacity: i32,
    pub amount_of_beds: i32,
    /// At most 80 characters.
    #[serde(default)]
    pub extra_sleeping_details: String,
    pub check_in_hour: i32,
    pub check_out_hour: i32,
    pub distance_from_city_center_in_meters: i32,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub location: LocationDto,
    pub venue_type_id: Option<i32>,
    #[serde(default)]
    pub amenity_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateVenueAmenitiesDto {
    pub amenity_ids: Vec<i32>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateVenueDetailsDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_per_night_in_eur_cent: Option<i32>,
    pub capacity: Option<i32>,
    pub amount_of_beds: Option<i32>,
    pub extra_sleeping_details: Option<String>,
    pub check_in_hour: Option<i32>,
    pub check_out_hour: Option<i32>,
    pub distance_from_city_center_in_meters: Option<i32>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub venue_type_id: Option<i32>,
}

/// Query string of the venue search.
///
/// Every field is optional and absent fields impose no constraint. `amenities` and
/// `occasions` are comma separated id lists such as `1,2,3`.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VenueFilterQuery {
    /// Comma separated amenity ids; venues must offer all of them.
    pub amenities: Option<String>,
    /// Comma separated occasion ids, expanded into their suggested amenities.
    pub occasions: Option<String>,
    pub venue_type_id: Option<i32>,
    /// Minimum price per night in euro cents.
    pub min_price: Option<i32>,
    /// Maximum price per night in euro cents.
    pub max_price: Option<i32>,
    /// Minimum capacity.
    pub guests: Option<i32>,
    /// Requires `date_end`.
    pub date_start: Option<NaiveDate>,
    /// Requires `date_start`.
    pub date_end: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Requires either `latitude` and `longitude` or `city`.
    pub radius_km: Option<f64>,
    /// Geocoded into the radius centre when no coordinates are given.
    pub city: Option<String>,
}
