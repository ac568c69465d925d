use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "amenity_to_occasion")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub occasion_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub amenity_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::occasion::Entity",
        from = "Column::OccasionId",
        to = "super::occasion::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Occasion,
    #[sea_orm(
        belongs_to = "super::amenity::Entity",
        from = "Column::AmenityId",
        to = "super::amenity::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Amenity,
}

impl Related<super::occasion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Occasion.def()
    }
}

impl Related<super::amenity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Amenity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
