//! Venue repository and the venue search predicate.
//!
//! Venues are returned with their amenities, loaded in two batched queries through the
//! `amenity_to_venue` join table rather than one query per venue. The repository is
//! generic over the connection so venue creation and rating aggregation can take part in
//! a transaction.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    geo::Coordinates,
    venue::{CreateVenueParams, Location, UpdateVenueDetailsParams, Venue},
    venue_filter::VenueFilter,
};

pub struct VenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every venue ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Venue>, DbErr> {
        let venues = entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::Id)
            .all(self.db)
            .await?;

        self.with_amenities(venues).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Venue>, DbErr> {
        let Some(venue) = entity::prelude::Venue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_amenities(vec![venue]).await?.pop())
    }

    /// Gets the owner of a venue without loading its amenities.
    pub async fn get_owner_id(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let owner_id = entity::prelude::Venue::find_by_id(id)
            .select_only()
            .column(entity::venue::Column::OwnerId)
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        Ok(owner_id)
    }

    /// Inserts a venue and links its amenities.
    ///
    /// # Arguments
    /// - `params` - Validated venue fields
    /// - `coordinates` - Geocoded address, `None` when it could not be located
    ///
    /// # Returns
    /// - `Ok(Venue)` - The created venue with its amenities
    /// - `Err(DbErr)` - Database error, including foreign key violations for an unknown
    ///   owner, venue type or amenity
    pub async fn create(
        &self,
        params: CreateVenueParams,
        coordinates: Option<Coordinates>,
    ) -> Result<Venue, DbErr> {
        let venue = entity::venue::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price_per_night_in_eur_cent: ActiveValue::Set(params.price_per_night_in_eur_cent),
            rating: ActiveValue::Set(0.0),
            capacity: ActiveValue::Set(params.capacity),
            amount_of_beds: ActiveValue::Set(params.amount_of_beds),
            extra_sleeping_details: ActiveValue::Set(params.extra_sleeping_details),
            check_in_hour: ActiveValue::Set(params.check_in_hour),
            check_out_hour: ActiveValue::Set(params.check_out_hour),
            distance_from_city_center_in_meters: ActiveValue::Set(
                params.distance_from_city_center_in_meters,
            ),
            facebook_url: ActiveValue::Set(params.facebook_url),
            instagram_url: ActiveValue::Set(params.instagram_url),
            twitter_url: ActiveValue::Set(params.twitter_url),
            website_url: ActiveValue::Set(params.website_url),
            street_number: ActiveValue::Set(params.location.street_number),
            street_name: ActiveValue::Set(params.location.street_name),
            postal_code: ActiveValue::Set(params.location.postal_code),
            city: ActiveValue::Set(params.location.city),
            latitude: ActiveValue::Set(coordinates.map(|c| c.latitude)),
            longitude: ActiveValue::Set(coordinates.map(|c| c.longitude)),
            owner_id: ActiveValue::Set(params.owner_id),
            venue_type_id: ActiveValue::Set(params.venue_type_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_amenity_links(venue.id, &params.amenity_ids)
            .await?;

        self.get_by_id(venue.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Venue with id {} not found after creation",
                venue.id
            )))
    }

    /// Replaces the address and coordinates of a venue.
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - The updated venue
    /// - `Ok(None)` - No venue with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_location(
        &self,
        id: i32,
        location: Location,
        coordinates: Option<Coordinates>,
    ) -> Result<Option<Venue>, DbErr> {
        let Some(existing) = entity::prelude::Venue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::venue::ActiveModel = existing.into();
        active_model.street_number = ActiveValue::Set(location.street_number);
        active_model.street_name = ActiveValue::Set(location.street_name);
        active_model.postal_code = ActiveValue::Set(location.postal_code);
        active_model.city = ActiveValue::Set(location.city);
        active_model.latitude = ActiveValue::Set(coordinates.map(|c| c.latitude));
        active_model.longitude = ActiveValue::Set(coordinates.map(|c| c.longitude));
        active_model.update(self.db).await?;

        self.get_by_id(id).await
    }

    /// Replaces the amenity set of a venue.
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - The venue with its new amenities
    /// - `Ok(None)` - No venue with that ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown amenity
    pub async fn replace_amenities(
        &self,
        id: i32,
        amenity_ids: &BTreeSet<i32>,
    ) -> Result<Option<Venue>, DbErr> {
        if entity::prelude::Venue::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        entity::prelude::AmenityToVenue::delete_many()
            .filter(entity::amenity_to_venue::Column::VenueId.eq(id))
            .exec(self.db)
            .await?;

        self.insert_amenity_links(id, amenity_ids).await?;

        self.get_by_id(id).await
    }

    /// Applies the present fields of a details update.
    pub async fn update_details(
        &self,
        params: UpdateVenueDetailsParams,
    ) -> Result<Option<Venue>, DbErr> {
        let Some(existing) = entity::prelude::Venue::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::venue::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(price) = params.price_per_night_in_eur_cent {
            active_model.price_per_night_in_eur_cent = ActiveValue::Set(price);
        }
        if let Some(capacity) = params.capacity {
            active_model.capacity = ActiveValue::Set(capacity);
        }
        if let Some(amount_of_beds) = params.amount_of_beds {
            active_model.amount_of_beds = ActiveValue::Set(amount_of_beds);
        }
        if let Some(details) = params.extra_sleeping_details {
            active_model.extra_sleeping_details = ActiveValue::Set(details);
        }
        if let Some(hour) = params.check_in_hour {
            active_model.check_in_hour = ActiveValue::Set(hour);
        }
        if let Some(hour) = params.check_out_hour {
            active_model.check_out_hour = ActiveValue::Set(hour);
        }
        if let Some(distance) = params.distance_from_city_center_in_meters {
            active_model.distance_from_city_center_in_meters = ActiveValue::Set(distance);
        }
        if let Some(url) = params.facebook_url {
            active_model.facebook_url = ActiveValue::Set(Some(url));
        }
        if let Some(url) = params.instagram_url {
            active_model.instagram_url = ActiveValue::Set(Some(url));
        }
        if let Some(url) = params.twitter_url {
            active_model.twitter_url = ActiveValue::Set(Some(url));
        }
        if let Some(url) = params.website_url {
            active_model.website_url = ActiveValue::Set(Some(url));
        }
        if let Some(venue_type_id) = params.venue_type_id {
            active_model.venue_type_id = ActiveValue::Set(Some(venue_type_id));
        }

        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        self.get_by_id(params.id).await
    }

    /// Stores a recomputed average rating.
    pub async fn update_rating(&self, id: i32, rating: f64) -> Result<(), DbErr> {
        entity::prelude::Venue::update_many()
            .col_expr(entity::venue::Column::Rating, Expr::value(rating))
            .filter(entity::venue::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a venue, cascading to its amenity links, reservations and favourites.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Venue::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every venue matching all present criteria of the filter, ordered by ID.
    pub async fn find_with_filters(&self, filter: &VenueFilter) -> Result<Vec<Venue>, DbErr> {
        let venues = entity::prelude::Venue::find()
            .filter(filter_condition(filter))
            .order_by_asc(entity::venue::Column::Id)
            .all(self.db)
            .await?;

        self.with_amenities(venues).await
    }

    async fn insert_amenity_links(
        &self,
        venue_id: i32,
        amenity_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        for amenity_id in amenity_ids {
            entity::amenity_to_venue::ActiveModel {
                venue_id: ActiveValue::Set(venue_id),
                amenity_id: ActiveValue::Set(*amenity_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Attaches amenities, ordered by name, to each venue.
    async fn with_amenities(&self, venues: Vec<entity::venue::Model>) -> Result<Vec<Venue>, DbErr> {
        if venues.is_empty() {
            return Ok(Vec::new());
        }

        let venue_ids: Vec<i32> = venues.iter().map(|v| v.id).collect();
        let links = entity::prelude::AmenityToVenue::find()
            .filter(entity::amenity_to_venue::Column::VenueId.is_in(venue_ids))
            .all(self.db)
            .await?;

        let amenity_ids: BTreeSet<i32> = links.iter().map(|l| l.amenity_id).collect();
        let amenities_map: HashMap<i32, entity::amenity::Model> = if amenity_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Amenity::find()
                .filter(entity::amenity::Column::Id.is_in(amenity_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect()
        };

        let mut amenities_by_venue: HashMap<i32, Vec<entity::amenity::Model>> = HashMap::new();
        for link in links {
            if let Some(amenity) = amenities_map.get(&link.amenity_id) {
                amenities_by_venue
                    .entry(link.venue_id)
                    .or_default()
                    .push(amenity.clone());
            }
        }

        Ok(venues
            .into_iter()
            .map(|venue| {
                let mut amenities = amenities_by_venue.remove(&venue.id).unwrap_or_default();
                amenities.sort_by(|a, b| a.name.cmp(&b.name));
                Venue::from_entity(venue, amenities)
            })
            .collect())
    }
}

/// Builds the conjunction of one predicate per present filter criterion.
///
/// An empty filter yields an empty `Condition::all()`, which matches every row.
pub fn filter_condition(filter: &VenueFilter) -> Condition {
    let mut condition = Condition::all();

    for amenity_id in &filter.amenity_ids {
        condition = condition.add(
            entity::venue::Column::Id.in_subquery(
                Query::select()
                    .column(entity::amenity_to_venue::Column::VenueId)
                    .from(entity::amenity_to_venue::Entity)
                    .and_where(entity::amenity_to_venue::Column::AmenityId.eq(*amenity_id))
                    .to_owned(),
            ),
        );
    }

    if let Some(venue_type_id) = filter.venue_type_id {
        condition = condition.add(entity::venue::Column::VenueTypeId.eq(venue_type_id));
    }
    if let Some(min_price) = filter.min_price {
        condition = condition.add(entity::venue::Column::PricePerNightInEurCent.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(entity::venue::Column::PricePerNightInEurCent.lte(max_price));
    }
    if let Some(guests) = filter.guests {
        condition = condition.add(entity::venue::Column::Capacity.gte(guests));
    }

    if let Some(range) = &filter.date_range {
        condition = condition.add(
            entity::venue::Column::Id.not_in_subquery(
                Query::select()
                    .column(entity::reservation::Column::VenueId)
                    .from(entity::reservation::Entity)
                    .and_where(entity::reservation::Column::IsPendingRating.eq(true))
                    .and_where(entity::reservation::Column::DateStart.lt(range.end()))
                    .and_where(entity::reservation::Column::DateEnd.gt(range.start()))
                    .to_owned(),
            ),
        );
    }

    if let Some(bounds) = &filter.bounding_box {
        condition = condition
            .add(entity::venue::Column::Latitude.between(bounds.min_latitude, bounds.max_latitude))
            .add(
                entity::venue::Column::Longitude
                    .between(bounds.min_longitude, bounds.max_longitude),
            );
    }

    if let Some(city) = &filter.city {
        condition = condition.add(entity::venue::Column::City.eq(city.as_str()));
    }

    condition
}
