use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "amenity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::amenity_to_venue::Entity")]
    AmenityToVenue,
    #[sea_orm(has_many = "super::amenity_to_occasion::Entity")]
    AmenityToOccasion,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::amenity_to_venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AmenityToVenue.def()
    }
}

impl Related<super::amenity_to_occasion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AmenityToOccasion.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        super::amenity_to_venue::Relation::Venue.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::amenity_to_venue::Relation::Amenity.def().rev())
    }
}

impl Related<super::occasion::Entity> for Entity {
    fn to() -> RelationDef {
        super::amenity_to_occasion::Relation::Occasion.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::amenity_to_occasion::Relation::Amenity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
