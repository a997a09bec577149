//! Rating domain models and parameters.

use crate::model::rating::BookRatingDto;

/// A rating joined with the rater's username, for the book detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRating {
    pub username: String,
    pub rating: i32,
}

impl BookRating {
    pub fn into_dto(self) -> BookRatingDto {
        BookRatingDto {
            username: self.username,
            rating: self.rating,
        }
    }
}

/// Parameters for submitting a rating on a shared book.
#[derive(Debug, Clone)]
pub struct RateBookParams {
    pub book_id: i32,
    pub user_id: i32,
    pub rating: i32,
}
