use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "venue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price_per_night_in_eur_cent: i32,
    #[sea_orm(column_type = "Double")]
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
    pub street_number: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub longitude: Option<f64>,
    pub owner_id: i32,
    pub venue_type_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::venue_type::Entity",
        from = "Column::VenueTypeId",
        to = "super::venue_type::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    VenueType,
    #[sea_orm(has_many = "super::amenity_to_venue::Entity")]
    AmenityToVenue,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::favourite::Entity")]
    Favourite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::venue_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VenueType.def()
    }
}

impl Related<super::amenity_to_venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AmenityToVenue.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::favourite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favourite.def()
    }
}

impl Related<super::amenity::Entity> for Entity {
    fn to() -> RelationDef {
        super::amenity_to_venue::Relation::Amenity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::amenity_to_venue::Relation::Venue.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
