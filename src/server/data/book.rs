//! Book data repository.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::book::{Book, BookSort, CreateBookParams, SharedBook, UpdateBookParams};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            rating: ActiveValue::Set(params.rating),
            read_date: ActiveValue::Set(params.read_date),
            notes: ActiveValue::Set(params.notes),
            cover_url: ActiveValue::Set(params.cover_url),
            shared: ActiveValue::Set(params.shared),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    pub async fn find_by_id(&self, book_id: i32) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(book_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Lists a user's books in the requested order: title ascending, owner
    /// rating descending, or read date descending.
    pub async fn list_by_owner(&self, user_id: i32, sort: BookSort) -> Result<Vec<Book>, DbErr> {
        let query = entity::prelude::Book::find()
            .filter(entity::book::Column::UserId.eq(user_id));

        let query = match sort {
            BookSort::Title => query.order_by_asc(entity::book::Column::Title),
            BookSort::Rating => query.order_by_desc(entity::book::Column::Rating),
            BookSort::Date => query.order_by_desc(entity::book::Column::ReadDate),
        };

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Updates a book's editable fields. The shared flag and owner are not
    /// touched here. Returns `None` when the book no longer exists.
    pub async fn update(&self, params: UpdateBookParams) -> Result<Option<Book>, DbErr> {
        let Some(existing) = entity::prelude::Book::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::book::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.author = ActiveValue::Set(params.author);
        active.rating = ActiveValue::Set(params.rating);
        active.read_date = ActiveValue::Set(params.read_date);
        active.notes = ActiveValue::Set(params.notes);
        active.cover_url = ActiveValue::Set(params.cover_url);

        let entity = active.update(self.db).await?;

        Ok(Some(Book::from_entity(entity)))
    }

    /// Deletes a book. Returns whether a row was actually removed.
    pub async fn delete(&self, book_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::delete_by_id(book_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists all shared books with their owner's username and average rating,
    /// most recently read first. Books without ratings average to 0.0.
    pub async fn list_shared(&self) -> Result<Vec<SharedBook>, DbErr> {
        let rows = entity::prelude::Book::find()
            .filter(entity::book::Column::Shared.eq(true))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::book::Column::ReadDate)
            .all(self.db)
            .await?;

        let book_ids: Vec<i32> = rows.iter().map(|(book, _)| book.id).collect();

        // Aggregate ratings per book in one query.
        let mut totals: HashMap<i32, (i64, i64)> = HashMap::new();
        if !book_ids.is_empty() {
            let ratings = entity::prelude::BookRating::find()
                .filter(entity::book_rating::Column::BookId.is_in(book_ids))
                .all(self.db)
                .await?;

            for rating in ratings {
                let entry = totals.entry(rating.book_id).or_insert((0, 0));
                entry.0 += rating.rating as i64;
                entry.1 += 1;
            }
        }

        let shared = rows
            .into_iter()
            .map(|(book, user)| {
                let average_rating = totals
                    .get(&book.id)
                    .map(|(sum, count)| *sum as f64 / *count as f64)
                    .unwrap_or(0.0);
                // Owner row always exists thanks to the foreign key; fall back
                // to an empty name rather than failing the whole feed.
                let username = user.map(|u| u.username).unwrap_or_default();

                SharedBook {
                    book: Book::from_entity(book),
                    username,
                    average_rating,
                }
            })
            .collect();

        Ok(shared)
    }
}
