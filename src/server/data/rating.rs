//! Rating data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::rating::{BookRating, RateBookParams};

pub struct RatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates the caller's rating for a book.
    ///
    /// The (book, user) pair is kept unique by this find-then-update logic
    /// rather than by a database constraint: resubmitting a rating updates
    /// the existing row in place.
    pub async fn upsert(&self, params: RateBookParams) -> Result<(), DbErr> {
        let existing = entity::prelude::BookRating::find()
            .filter(entity::book_rating::Column::BookId.eq(params.book_id))
            .filter(entity::book_rating::Column::UserId.eq(params.user_id))
            .one(self.db)
            .await?;

        match existing {
            Some(entity) => {
                let mut active: entity::book_rating::ActiveModel = entity.into();
                active.rating = ActiveValue::Set(params.rating);
                active.update(self.db).await?;
            }
            None => {
                entity::book_rating::ActiveModel {
                    book_id: ActiveValue::Set(params.book_id),
                    user_id: ActiveValue::Set(params.user_id),
                    rating: ActiveValue::Set(params.rating),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Lists all ratings for a book together with the rater usernames.
    pub async fn list_for_book(&self, book_id: i32) -> Result<Vec<BookRating>, DbErr> {
        let rows = entity::prelude::BookRating::find()
            .filter(entity::book_rating::Column::BookId.eq(book_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(rating, user)| BookRating {
                username: user.map(|u| u.username).unwrap_or_default(),
                rating: rating.rating,
            })
            .collect())
    }
}
