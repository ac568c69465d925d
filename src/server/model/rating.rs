use crate::{
    model::rating::{CreateRatingDto, RatingDto},
    server::error::AppError,
};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub score: i32,
    pub review: Option<String>,
    pub reservation_id: i32,
}

impl Rating {
    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            id: self.id,
            score: self.score,
            review: self.review,
            reservation_id: self.reservation_id,
        }
    }

    pub fn from_entity(entity: entity::rating::Model) -> Self {
        Self {
            id: entity.id,
            score: entity.score,
            review: entity.review,
            reservation_id: entity.reservation_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRatingParams {
    pub reservation_id: i32,
    pub score: i32,
    pub review: Option<String>,
}

impl CreateRatingParams {
    /// Validates the score range and that a present review has content.
    pub fn from_dto(dto: CreateRatingDto) -> Result<Self, AppError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&dto.score) {
            return Err(AppError::BadRequest(format!(
                "Score must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }

        if let Some(review) = &dto.review {
            if review.trim().is_empty() {
                return Err(AppError::BadRequest("Review must not be empty".to_string()));
            }
        }

        Ok(Self {
            reservation_id: dto.reservation_id,
            score: dto.score,
            review: dto.review,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(score: i32, review: Option<&str>) -> CreateRatingDto {
        CreateRatingDto {
            reservation_id: 1,
            score,
            review: review.map(str::to_string),
        }
    }

    #[test]
    fn accepts_score_bounds() {
        assert!(CreateRatingParams::from_dto(dto(1, None)).is_ok());
        assert!(CreateRatingParams::from_dto(dto(5, Some("Lovely"))).is_ok());
    }

    #[test]
    fn rejects_score_out_of_range() {
        assert!(matches!(
            CreateRatingParams::from_dto(dto(0, None)),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            CreateRatingParams::from_dto(dto(6, None)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_blank_review() {
        assert!(matches!(
            CreateRatingParams::from_dto(dto(4, Some("  "))),
            Err(AppError::BadRequest(_))
        ));
    }
}
