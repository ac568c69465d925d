use crate::model::favourite::FavouriteDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Favourite {
    pub id: i32,
    pub venue_id: i32,
    pub user_id: i32,
}

impl Favourite {
    pub fn into_dto(self) -> FavouriteDto {
        FavouriteDto {
            id: self.id,
            venue_id: self.venue_id,
            user_id: self.user_id,
        }
    }

    pub fn from_entity(entity: entity::favourite::Model) -> Self {
        Self {
            id: entity.id,
            venue_id: entity.venue_id,
            user_id: entity.user_id,
        }
    }
}
