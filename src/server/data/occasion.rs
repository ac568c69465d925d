//! Occasion repository.
//!
//! Occasions are stored with their suggested amenities in the `amenity_to_occasion` join
//! table. The repository is generic over the connection so the service can run create and
//! update inside a transaction, keeping an occasion and its links consistent.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::occasion::{CreateOccasionParams, Occasion, UpdateOccasionParams};

pub struct OccasionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OccasionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all occasions ordered by name, each with its amenity IDs
    pub async fn get_all(&self) -> Result<Vec<Occasion>, DbErr> {
        let occasions = entity::prelude::Occasion::find()
            .order_by_asc(entity::occasion::Column::Name)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = occasions.iter().map(|o| o.id).collect();
        let mut amenity_ids_by_occasion = self.amenity_ids_by_occasion(ids).await?;

        Ok(occasions
            .into_iter()
            .map(|occasion| {
                let amenity_ids = amenity_ids_by_occasion
                    .remove(&occasion.id)
                    .unwrap_or_default();
                Occasion::from_entity(occasion, amenity_ids)
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Occasion>, DbErr> {
        let Some(occasion) = entity::prelude::Occasion::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let amenity_ids = self
            .amenity_ids_by_occasion(vec![id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(Occasion::from_entity(occasion, amenity_ids)))
    }

    /// Creates an occasion and links its amenities.
    ///
    /// # Returns
    /// - `Ok(Occasion)` - The created occasion
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown amenity
    pub async fn create(&self, params: CreateOccasionParams) -> Result<Occasion, DbErr> {
        let occasion = entity::occasion::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_links(occasion.id, &params.amenity_ids).await?;

        Ok(Occasion::from_entity(
            occasion,
            params.amenity_ids.into_iter().collect(),
        ))
    }

    /// Renames an occasion and/or replaces its amenity set.
    ///
    /// # Returns
    /// - `Ok(Some(Occasion))` - The updated occasion
    /// - `Ok(None)` - No occasion with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateOccasionParams) -> Result<Option<Occasion>, DbErr> {
        let Some(existing) = entity::prelude::Occasion::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if let Some(name) = params.name {
            let mut active_model: entity::occasion::ActiveModel = existing.into();
            active_model.name = ActiveValue::Set(name);
            active_model.update(self.db).await?;
        }

        if let Some(amenity_ids) = params.amenity_ids {
            entity::prelude::AmenityToOccasion::delete_many()
                .filter(entity::amenity_to_occasion::Column::OccasionId.eq(params.id))
                .exec(self.db)
                .await?;

            self.insert_links(params.id, &amenity_ids).await?;
        }

        self.get_by_id(params.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Occasion::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Unions the suggested amenities of the given occasions.
    ///
    /// Unknown occasion IDs contribute nothing.
    pub async fn get_amenity_ids_for_occasions(
        &self,
        occasion_ids: &BTreeSet<i32>,
    ) -> Result<BTreeSet<i32>, DbErr> {
        if occasion_ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let links = entity::prelude::AmenityToOccasion::find()
            .filter(
                entity::amenity_to_occasion::Column::OccasionId
                    .is_in(occasion_ids.iter().copied()),
            )
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.amenity_id).collect())
    }

    async fn amenity_ids_by_occasion(
        &self,
        occasion_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if occasion_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::AmenityToOccasion::find()
            .filter(entity::amenity_to_occasion::Column::OccasionId.is_in(occasion_ids))
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            map.entry(link.occasion_id).or_default().push(link.amenity_id);
        }

        Ok(map)
    }

    async fn insert_links(&self, occasion_id: i32, amenity_ids: &BTreeSet<i32>) -> Result<(), DbErr> {
        for amenity_id in amenity_ids {
            entity::amenity_to_occasion::ActiveModel {
                occasion_id: ActiveValue::Set(occasion_id),
                amenity_id: ActiveValue::Set(*amenity_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
