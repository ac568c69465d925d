use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "occasion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::amenity_to_occasion::Entity")]
    AmenityToOccasion,
}

impl Related<super::amenity_to_occasion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AmenityToOccasion.def()
    }
}

impl Related<super::amenity::Entity> for Entity {
    fn to() -> RelationDef {
        super::amenity_to_occasion::Relation::Amenity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::amenity_to_occasion::Relation::Occasion.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
