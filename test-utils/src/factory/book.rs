//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// Books require an owning user; pass the owner's id to `new()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db, user.id)
///     .title("The Hobbit")
///     .rating(5)
///     .shared(true)
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    rating: i32,
    read_date: DateTime<Utc>,
    notes: String,
    cover_url: String,
    shared: bool,
    user_id: i32,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"` where id is auto-incremented
    /// - author: `"Author {id}"`
    /// - rating: `3`
    /// - read_date: now
    /// - shared: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            rating: 3,
            read_date: Utc::now(),
            notes: String::new(),
            cover_url: format!("https://covers.example/b/id/{}-M.jpg", id),
            shared: false,
            user_id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn read_date(mut self, read_date: DateTime<Utc>) -> Self {
        self.read_date = read_date;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    pub fn shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            rating: ActiveValue::Set(self.rating),
            read_date: ActiveValue::Set(self.read_date),
            notes: ActiveValue::Set(self.notes),
            cover_url: ActiveValue::Set(self.cover_url),
            shared: ActiveValue::Set(self.shared),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private book with default values, owned by the given user.
pub async fn create_book(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, user_id).build().await
}

/// Creates a shared book with default values, owned by the given user.
pub async fn create_shared_book(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, user_id).shared(true).build().await
}
