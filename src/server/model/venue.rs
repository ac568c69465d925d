//! Venue domain models and parameters.
//!
//! Provides the venue model returned by every venue query, its postal location, and the
//! parameter types for creating a venue and for the three partial updates (location,
//! amenities, details). Request values are validated in the `from_dto` constructors.

use std::collections::BTreeSet;

use crate::{
    model::venue::{
        CreateVenueDto, LocationDto, UpdateVenueAmenitiesDto, UpdateVenueDetailsDto, VenueDto,
    },
    server::{
        error::AppError,
        model::{amenity::Amenity, geo::Coordinates, venue_type::validate_name},
    },
};

/// Maximum length of `extra_sleeping_details`, in characters.
pub const MAX_EXTRA_SLEEPING_DETAILS_LENGTH: usize = 80;

/// Postal address of a venue.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub street_number: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

impl Location {
    /// Free-form address line handed to the geocoder.
    pub fn address(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street_number, self.street_name, self.postal_code, self.city
        )
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            street_number: self.street_number,
            street_name: self.street_name,
            postal_code: self.postal_code,
            city: self.city,
        }
    }

    /// Validates that every address part is present.
    pub fn from_dto(dto: LocationDto) -> Result<Self, AppError> {
        let parts = [
            ("street_number", &dto.street_number),
            ("street_name", &dto.street_name),
            ("postal_code", &dto.postal_code),
            ("city", &dto.city),
        ];
        if let Some((field, _)) = parts.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::BadRequest(format!("{} must not be empty", field)));
        }

        Ok(Self {
            street_number: dto.street_number.trim().to_string(),
            street_name: dto.street_name.trim().to_string(),
            postal_code: dto.postal_code.trim().to_string(),
            city: dto.city.trim().to_string(),
        })
    }
}

/// Venue with its amenities.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
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
    pub location: Location,
    /// Absent when the address could not be geocoded.
    pub coordinates: Option<Coordinates>,
    pub owner_id: i32,
    pub venue_type_id: Option<i32>,
    pub amenities: Vec<Amenity>,
}

impl Venue {
    pub fn into_dto(self) -> VenueDto {
        VenueDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price_per_night_in_eur_cent: self.price_per_night_in_eur_cent,
            rating: self.rating,
            capacity: self.capacity,
            amount_of_beds: self.amount_of_beds,
            extra_sleeping_details: self.extra_sleeping_details,
            check_in_hour: self.check_in_hour,
            check_out_hour: self.check_out_hour,
            distance_from_city_center_in_meters: self.distance_from_city_center_in_meters,
            facebook_url: self.facebook_url,
            instagram_url: self.instagram_url,
            twitter_url: self.twitter_url,
            website_url: self.website_url,
            location: self.location.into_dto(),
            latitude: self.coordinates.map(|c| c.latitude),
            longitude: self.coordinates.map(|c| c.longitude),
            owner_id: self.owner_id,
            venue_type_id: self.venue_type_id,
            amenities: self.amenities.into_iter().map(Amenity::into_dto).collect(),
        }
    }

    /// Converts entity models at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The venue row
    /// - `amenities` - Amenity rows linked to the venue, in display order
    pub fn from_entity(entity: entity::venue::Model, amenities: Vec<entity::amenity::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price_per_night_in_eur_cent: entity.price_per_night_in_eur_cent,
            rating: entity.rating,
            capacity: entity.capacity,
            amount_of_beds: entity.amount_of_beds,
            extra_sleeping_details: entity.extra_sleeping_details,
            check_in_hour: entity.check_in_hour,
            check_out_hour: entity.check_out_hour,
            distance_from_city_center_in_meters: entity.distance_from_city_center_in_meters,
            facebook_url: entity.facebook_url,
            instagram_url: entity.instagram_url,
            twitter_url: entity.twitter_url,
            website_url: entity.website_url,
            location: Location {
                street_number: entity.street_number,
                street_name: entity.street_name,
                postal_code: entity.postal_code,
                city: entity.city,
            },
            coordinates: Coordinates::from_columns(entity.latitude, entity.longitude),
            owner_id: entity.owner_id,
            venue_type_id: entity.venue_type_id,
            amenities: amenities.into_iter().map(Amenity::from_entity).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVenueParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub price_per_night_in_eur_cent: i32,
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
    pub location: Location,
    pub venue_type_id: Option<i32>,
    pub amenity_ids: BTreeSet<i32>,
}

impl CreateVenueParams {
    /// Builds parameters for the session's user after validating the request.
    pub fn from_dto(owner_id: i32, dto: CreateVenueDto) -> Result<Self, AppError> {
        validate_price(dto.price_per_night_in_eur_cent)?;
        validate_capacity(dto.capacity, dto.amount_of_beds)?;
        validate_hour("check_in_hour", dto.check_in_hour)?;
        validate_hour("check_out_hour", dto.check_out_hour)?;
        validate_extra_sleeping_details(&dto.extra_sleeping_details)?;
        validate_distance(dto.distance_from_city_center_in_meters)?;

        Ok(Self {
            owner_id,
            name: validate_name(&dto.name)?,
            description: dto.description,
            price_per_night_in_eur_cent: dto.price_per_night_in_eur_cent,
            capacity: dto.capacity,
            amount_of_beds: dto.amount_of_beds,
            extra_sleeping_details: dto.extra_sleeping_details,
            check_in_hour: dto.check_in_hour,
            check_out_hour: dto.check_out_hour,
            distance_from_city_center_in_meters: dto.distance_from_city_center_in_meters,
            facebook_url: dto.facebook_url,
            instagram_url: dto.instagram_url,
            twitter_url: dto.twitter_url,
            website_url: dto.website_url,
            location: Location::from_dto(dto.location)?,
            venue_type_id: dto.venue_type_id,
            amenity_ids: dto.amenity_ids.into_iter().collect(),
        })
    }
}

/// Replacement amenity set of a venue.
#[derive(Debug, Clone)]
pub struct UpdateVenueAmenitiesParams {
    pub id: i32,
    pub amenity_ids: BTreeSet<i32>,
}

impl UpdateVenueAmenitiesParams {
    pub fn from_dto(id: i32, dto: UpdateVenueAmenitiesDto) -> Self {
        Self {
            id,
            amenity_ids: dto.amenity_ids.into_iter().collect(),
        }
    }
}

/// Partial update of descriptive fields; `None` leaves the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateVenueDetailsParams {
    pub id: i32,
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

impl UpdateVenueDetailsParams {
    pub fn from_dto(id: i32, dto: UpdateVenueDetailsDto) -> Result<Self, AppError> {
        if let Some(price) = dto.price_per_night_in_eur_cent {
            validate_price(price)?;
        }
        if let Some(capacity) = dto.capacity {
            validate_capacity(capacity, dto.amount_of_beds.unwrap_or(0))?;
        }
        if let Some(beds) = dto.amount_of_beds {
            validate_capacity(dto.capacity.unwrap_or(1), beds)?;
        }
        if let Some(hour) = dto.check_in_hour {
            validate_hour("check_in_hour", hour)?;
        }
        if let Some(hour) = dto.check_out_hour {
            validate_hour("check_out_hour", hour)?;
        }
        if let Some(details) = &dto.extra_sleeping_details {
            validate_extra_sleeping_details(details)?;
        }
        if let Some(distance) = dto.distance_from_city_center_in_meters {
            validate_distance(distance)?;
        }

        Ok(Self {
            id,
            name: dto.name.as_deref().map(validate_name).transpose()?,
            description: dto.description,
            price_per_night_in_eur_cent: dto.price_per_night_in_eur_cent,
            capacity: dto.capacity,
            amount_of_beds: dto.amount_of_beds,
            extra_sleeping_details: dto.extra_sleeping_details,
            check_in_hour: dto.check_in_hour,
            check_out_hour: dto.check_out_hour,
            distance_from_city_center_in_meters: dto.distance_from_city_center_in_meters,
            facebook_url: dto.facebook_url,
            instagram_url: dto.instagram_url,
            twitter_url: dto.twitter_url,
            website_url: dto.website_url,
            venue_type_id: dto.venue_type_id,
        })
    }
}

fn validate_price(price: i32) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::BadRequest(
            "price_per_night_in_eur_cent must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_capacity(capacity: i32, amount_of_beds: i32) -> Result<(), AppError> {
    if capacity < 1 {
        return Err(AppError::BadRequest(
            "capacity must be at least 1".to_string(),
        ));
    }
    if amount_of_beds < 0 {
        return Err(AppError::BadRequest(
            "amount_of_beds must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_hour(field: &str, hour: i32) -> Result<(), AppError> {
    if !(0..=23).contains(&hour) {
        return Err(AppError::BadRequest(format!(
            "{} must be between 0 and 23",
            field
        )));
    }
    Ok(())
}

fn validate_distance(distance: i32) -> Result<(), AppError> {
    if distance < 0 {
        return Err(AppError::BadRequest(
            "distance_from_city_center_in_meters must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_extra_sleeping_details(details: &str) -> Result<(), AppError> {
    if details.chars().count() > MAX_EXTRA_SLEEPING_DETAILS_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Extra sleeping details must be at most {} characters long",
            MAX_EXTRA_SLEEPING_DETAILS_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_dto() -> LocationDto {
        LocationDto {
            street_number: "12".to_string(),
            street_name: "Prinsengracht".to_string(),
            postal_code: "1015 DV".to_string(),
            city: "Amsterdam".to_string(),
        }
    }

    fn create_dto() -> CreateVenueDto {
        CreateVenueDto {
            name: "Canal House".to_string(),
            description: "Three floors on the canal".to_string(),
            price_per_night_in_eur_cent: 25_000,
            capacity: 6,
            amount_of_beds: 3,
            extra_sleeping_details: "Sofa bed for one".to_string(),
            check_in_hour: 15,
            check_out_hour: 11,
            distance_from_city_center_in_meters: 800,
            facebook_url: None,
            instagram_url: None,
            twitter_url: None,
            website_url: None,
            location: location_dto(),
            venue_type_id: None,
            amenity_ids: vec![3, 1, 3],
        }
    }

    #[test]
    fn formats_address_for_geocoding() {
        let location = Location::from_dto(location_dto()).unwrap();

        assert_eq!(location.address(), "12 Prinsengracht, 1015 DV Amsterdam");
    }

    #[test]
    fn deduplicates_amenity_ids() {
        let params = CreateVenueParams::from_dto(1, create_dto()).unwrap();

        assert_eq!(params.amenity_ids.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn rejects_long_extra_sleeping_details() {
        let mut dto = create_dto();
        dto.extra_sleeping_details = "x".repeat(MAX_EXTRA_SLEEPING_DETAILS_LENGTH + 1);

        assert!(matches!(
            CreateVenueParams::from_dto(1, dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_invalid_hour() {
        let mut dto = create_dto();
        dto.check_in_hour = 24;

        assert!(matches!(
            CreateVenueParams::from_dto(1, dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_blank_city() {
        let mut dto = create_dto();
        dto.location.city = " ".to_string();

        assert!(matches!(
            CreateVenueParams::from_dto(1, dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn details_update_validates_only_present_fields() {
        let dto = UpdateVenueDetailsDto {
            capacity: Some(0),
            ..Default::default()
        };

        assert!(UpdateVenueDetailsParams::from_dto(1, UpdateVenueDetailsDto::default()).is_ok());
        assert!(matches!(
            UpdateVenueDetailsParams::from_dto(1, dto),
            Err(AppError::BadRequest(_))
        ));
    }
}
