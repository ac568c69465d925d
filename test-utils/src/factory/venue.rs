//! Venue factory for creating test venue entities.
//!
//! Defaults describe a modest city apartment without coordinates or a venue type, so
//! tests only set the fields the filter under test looks at.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test venues with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::venue::VenueFactory;
///
/// let venue = VenueFactory::new(&db, owner.id)
///     .price_per_night_in_eur_cent(12_500)
///     .capacity(6)
///     .venue_type_id(Some(villa.id))
///     .build()
///     .await?;
/// ```
pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::venue::Model,
}

impl<'a> VenueFactory<'a> {
    /// Creates a new VenueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Venue {id}"`
    /// - price: 10000 cents per night
    /// - capacity: 4 guests, 2 beds
    /// - check in at 15, check out at 11
    /// - address in Amsterdam without coordinates
    /// - no venue type
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - Existing user owning the venue
    ///
    /// # Returns
    /// - `VenueFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        let entity = entity::venue::Model {
            id: 0,
            name: format!("Venue {}", id),
            description: "A quiet place to stay".to_string(),
            price_per_night_in_eur_cent: 10_000,
            rating: 0.0,
            capacity: 4,
            amount_of_beds: 2,
            extra_sleeping_details: String::new(),
            check_in_hour: 15,
            check_out_hour: 11,
            distance_from_city_center_in_meters: 1_000,
            facebook_url: None,
            instagram_url: None,
            twitter_url: None,
            website_url: None,
            street_number: id.to_string(),
            street_name: "Damstraat".to_string(),
            postal_code: "1012 JM".to_string(),
            city: "Amsterdam".to_string(),
            latitude: None,
            longitude: None,
            owner_id,
            venue_type_id: None,
        };

        Self { db, entity }
    }

    /// Sets the display name for the venue.
    ///
    /// # Arguments
    /// - `name` - Venue name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the nightly price.
    ///
    /// # Arguments
    /// - `price` - Price per night in euro cents
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price_per_night_in_eur_cent(mut self, price: i32) -> Self {
        self.entity.price_per_night_in_eur_cent = price;
        self
    }

    /// Sets the maximum number of guests.
    ///
    /// # Arguments
    /// - `capacity` - Guest capacity
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.entity.capacity = capacity;
        self
    }

    /// Sets the stored average rating.
    ///
    /// # Arguments
    /// - `rating` - Average score, `0.0` when unrated
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rating(mut self, rating: f64) -> Self {
        self.entity.rating = rating;
        self
    }

    /// Sets the city of the address.
    ///
    /// # Arguments
    /// - `city` - City name, matched exactly by city filters
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    /// Sets latitude and longitude in degrees.
    ///
    /// # Arguments
    /// - `latitude` - Latitude of the venue
    /// - `longitude` - Longitude of the venue
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.entity.latitude = Some(latitude);
        self.entity.longitude = Some(longitude);
        self
    }

    /// Sets or clears the venue type.
    ///
    /// # Arguments
    /// - `venue_type_id` - Existing venue type, or `None`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn venue_type_id(mut self, venue_type_id: Option<i32>) -> Self {
        self.entity.venue_type_id = venue_type_id;
        self
    }

    /// Builds and inserts the venue entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::venue::Model)` - Created venue entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        let e = self.entity;
        entity::venue::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(e.name),
            description: ActiveValue::Set(e.description),
            price_per_night_in_eur_cent: ActiveValue::Set(e.price_per_night_in_eur_cent),
            rating: ActiveValue::Set(e.rating),
            capacity: ActiveValue::Set(e.capacity),
            amount_of_beds: ActiveValue::Set(e.amount_of_beds),
            extra_sleeping_details: ActiveValue::Set(e.extra_sleeping_details),
            check_in_hour: ActiveValue::Set(e.check_in_hour),
            check_out_hour: ActiveValue::Set(e.check_out_hour),
            distance_from_city_center_in_meters: ActiveValue::Set(
                e.distance_from_city_center_in_meters,
            ),
            facebook_url: ActiveValue::Set(e.facebook_url),
            instagram_url: ActiveValue::Set(e.instagram_url),
            twitter_url: ActiveValue::Set(e.twitter_url),
            website_url: ActiveValue::Set(e.website_url),
            street_number: ActiveValue::Set(e.street_number),
            street_name: ActiveValue::Set(e.street_name),
            postal_code: ActiveValue::Set(e.postal_code),
            city: ActiveValue::Set(e.city),
            latitude: ActiveValue::Set(e.latitude),
            longitude: ActiveValue::Set(e.longitude),
            owner_id: ActiveValue::Set(e.owner_id),
            venue_type_id: ActiveValue::Set(e.venue_type_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a venue with default values for the given owner.
///
/// Shorthand for `VenueFactory::new(db, owner_id).build().await`.
pub async fn create_venue(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db, owner_id).build().await
}
