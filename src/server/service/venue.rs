//! Venue management and search.
//!
//! Besides CRUD this service hosts the search's composition step: it expands occasions
//! into their suggested amenities, resolves the search area into a bounding box
//! (geocoding a city when no coordinates are given) and hands the resolved
//! [`VenueFilter`] to the repository.

use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{occasion::OccasionRepository, venue::VenueRepository},
    error::{store::StoreViolation, AppError},
    model::{
        geo::{BoundingBox, Coordinates},
        venue::{
            CreateVenueParams, Location, UpdateVenueAmenitiesParams, UpdateVenueDetailsParams,
            Venue,
        },
        venue_filter::{SearchArea, VenueFilter, VenueFilterParams},
    },
    service::geocoder::Geocoder,
};

pub struct VenueService<'a, G: Geocoder> {
    db: &'a DatabaseConnection,
    geocoder: &'a G,
}

impl<'a, G: Geocoder> VenueService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, geocoder: &'a G) -> Self {
        Self { db, geocoder }
    }

    pub async fn get_all(&self) -> Result<Vec<Venue>, AppError> {
        Ok(VenueRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Venue, AppError> {
        VenueRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| venue_not_found(id))
    }

    /// Creates a venue, geocoding its address.
    ///
    /// A venue whose address cannot be located is still created, without coordinates.
    ///
    /// # Returns
    /// - `Ok(Venue)` - The created venue with its amenities
    /// - `Err(AppError::NotFound)` - The owner, venue type or an amenity does not exist
    pub async fn create(&self, params: CreateVenueParams) -> Result<Venue, AppError> {
        let coordinates = self.locate(&params.location).await;

        let txn = self.db.begin().await?;
        let venue = VenueRepository::new(&txn)
            .create(params, coordinates)
            .await
            .map_err(|err| {
                missing_reference(err, "Owner, venue type or amenity not found")
            })?;
        txn.commit().await?;

        tracing::info!("Created venue {} for owner {}", venue.id, venue.owner_id);

        Ok(venue)
    }

    /// Replaces the address of a venue and geocodes it again.
    pub async fn update_location(&self, id: i32, location: Location) -> Result<Venue, AppError> {
        let coordinates = self.locate(&location).await;

        VenueRepository::new(self.db)
            .update_location(id, location, coordinates)
            .await?
            .ok_or_else(|| venue_not_found(id))
    }

    /// Replaces the amenity set of a venue.
    pub async fn update_amenities(
        &self,
        params: UpdateVenueAmenitiesParams,
    ) -> Result<Venue, AppError> {
        let txn = self.db.begin().await?;
        let venue = VenueRepository::new(&txn)
            .replace_amenities(params.id, &params.amenity_ids)
            .await
            .map_err(|err| missing_reference(err, "Amenity not found"))?
            .ok_or_else(|| venue_not_found(params.id))?;
        txn.commit().await?;

        Ok(venue)
    }

    pub async fn update_details(&self, params: UpdateVenueDetailsParams) -> Result<Venue, AppError> {
        let id = params.id;

        VenueRepository::new(self.db)
            .update_details(params)
            .await
            .map_err(|err| missing_reference(err, "Venue type not found"))?
            .ok_or_else(|| venue_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !VenueRepository::new(self.db).delete(id).await? {
            return Err(venue_not_found(id));
        }

        tracing::info!("Deleted venue {}", id);

        Ok(())
    }

    /// Unions the requested amenities with those suggested by the requested occasions.
    ///
    /// Occasions that do not exist contribute nothing.
    pub async fn get_combined_amenities(
        &self,
        amenity_ids: &BTreeSet<i32>,
        occasion_ids: &BTreeSet<i32>,
    ) -> Result<BTreeSet<i32>, AppError> {
        let mut combined = amenity_ids.clone();

        if !occasion_ids.is_empty() {
            combined.extend(
                OccasionRepository::new(self.db)
                    .get_amenity_ids_for_occasions(occasion_ids)
                    .await?,
            );
        }

        Ok(combined)
    }

    /// Searches venues matching every given criterion.
    ///
    /// # Returns
    /// - `Ok(Vec<Venue>)` - Matching venues, empty when nothing matches
    /// - `Err(AppError::NotFound)` - The city of a radius search could not be located
    pub async fn find_with_filters(&self, params: VenueFilterParams) -> Result<Vec<Venue>, AppError> {
        let filter = self.resolve_filter(params).await?;

        Ok(VenueRepository::new(self.db)
            .find_with_filters(&filter)
            .await?)
    }

    async fn resolve_filter(&self, params: VenueFilterParams) -> Result<VenueFilter, AppError> {
        let amenity_ids = self
            .get_combined_amenities(&params.amenity_ids, &params.occasion_ids)
            .await?;

        let bounding_box = match params.area {
            Some(SearchArea::Around { center, radius_km }) => {
                Some(BoundingBox::around(center, radius_km))
            }
            Some(SearchArea::City { city, radius_km }) => {
                let center = self
                    .geocoder
                    .geocode(&city)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;
                Some(BoundingBox::around(center, radius_km))
            }
            None => None,
        };

        Ok(VenueFilter {
            amenity_ids,
            venue_type_id: params.venue_type_id,
            min_price: params.min_price,
            max_price: params.max_price,
            guests: params.guests,
            date_range: params.date_range,
            bounding_box,
            city: params.city,
        })
    }

    /// Geocodes a venue address, logging instead of failing when it cannot be located.
    async fn locate(&self, location: &Location) -> Option<Coordinates> {
        let address = location.address();

        match self.geocoder.geocode(&address).await {
            Ok(Some(coordinates)) => Some(coordinates),
            Ok(None) => {
                tracing::warn!("Address '{}' could not be geocoded", address);
                None
            }
            Err(err) => {
                tracing::warn!("Geocoding '{}' failed: {}", address, err);
                None
            }
        }
    }
}

fn venue_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Venue with ID {} not found", id))
}

/// Maps a foreign key violation to `NotFound`, passing other errors through.
fn missing_reference(err: DbErr, message: &str) -> AppError {
    match StoreViolation::classify(&err) {
        Some(StoreViolation::ForeignKey) => AppError::NotFound(message.to_string()),
        _ => err.into(),
    }
}
