//! Rating submission on shared books.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{book::BookRepository, rating::RatingRepository},
    error::AppError,
    model::rating::RateBookParams,
};

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the caller's rating for a book, updating any previous one.
    ///
    /// The book must be visible to the caller (shared, or their own); a book
    /// that is neither reads as missing. Out-of-range values are a 400.
    pub async fn rate(&self, params: RateBookParams) -> Result<(), AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&params.rating) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let Some(book) = BookRepository::new(self.db).find_by_id(params.book_id).await? else {
            return Err(AppError::NotFound("Book not found".to_string()));
        };

        if !book.shared && book.user_id != params.user_id {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        RatingRepository::new(self.db).upsert(params).await?;

        Ok(())
    }
}
