//! Book listing, visibility, and owner-gated mutation.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{book::BookRepository, rating::RatingRepository},
    error::{auth::AuthError, AppError},
    model::{
        book::{Book, BookSort, CreateBookParams, SharedBook, UpdateBookParams},
        rating::BookRating,
    },
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBookParams) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        let book = repo.create(params).await?;

        Ok(book)
    }

    pub async fn list_for_owner(
        &self,
        user_id: i32,
        sort: BookSort,
    ) -> Result<Vec<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        let books = repo.list_by_owner(user_id, sort).await?;

        Ok(books)
    }

    /// Fetches a book visible to the viewer, along with all its ratings.
    ///
    /// A book is visible to its owner always, and to everyone else only when
    /// shared. An invisible book is indistinguishable from a missing one.
    pub async fn get_visible(
        &self,
        book_id: i32,
        viewer_id: i32,
    ) -> Result<Option<(Book, Vec<BookRating>)>, AppError> {
        let repo = BookRepository::new(self.db);

        let Some(book) = repo.find_by_id(book_id).await? else {
            return Ok(None);
        };

        if book.user_id != viewer_id && !book.shared {
            return Ok(None);
        }

        let ratings = RatingRepository::new(self.db).list_for_book(book_id).await?;

        Ok(Some((book, ratings)))
    }

    /// Fetches a book the caller must own: 404 when missing, 403 when owned
    /// by someone else.
    pub async fn require_owned(&self, book_id: i32, user_id: i32) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        let Some(book) = repo.find_by_id(book_id).await? else {
            return Err(AppError::NotFound("Book not found".to_string()));
        };

        if book.user_id != user_id {
            return Err(AuthError::NotBookOwner { user_id, book_id }.into());
        }

        Ok(book)
    }

    /// Updates a book after checking ownership.
    pub async fn update_owned(
        &self,
        user_id: i32,
        params: UpdateBookParams,
    ) -> Result<Book, AppError> {
        self.require_owned(params.id, user_id).await?;

        let repo = BookRepository::new(self.db);

        let updated = repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        Ok(updated)
    }

    /// Deletes a book after checking ownership.
    pub async fn delete_owned(&self, user_id: i32, book_id: i32) -> Result<(), AppError> {
        self.require_owned(book_id, user_id).await?;

        let repo = BookRepository::new(self.db);

        if !repo.delete(book_id).await? {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        Ok(())
    }

    /// The public feed: every shared book with owner and rating average.
    pub async fn shared_feed(&self) -> Result<Vec<SharedBook>, AppError> {
        let repo = BookRepository::new(self.db);

        let shared = repo.list_shared().await?;

        Ok(shared)
    }
}
