//! Book domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::book::{BookDto, CreateBookDto, SharedBookDto, UpdateBookDto},
    server::error::AppError,
};

/// A book recorded by a user, with the owner's own rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub rating: i32,
    pub read_date: DateTime<Utc>,
    pub notes: String,
    pub cover_url: String,
    pub shared: bool,
    pub user_id: i32,
}

impl Book {
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            rating: self.rating,
            read_date: self.read_date,
            notes: self.notes,
            cover_url: self.cover_url,
            shared: self.shared,
            user_id: self.user_id,
        }
    }

    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            rating: entity.rating,
            read_date: entity.read_date,
            notes: entity.notes,
            cover_url: entity.cover_url,
            shared: entity.shared,
            user_id: entity.user_id,
        }
    }
}

/// Sort order for a user's book list.
///
/// Parsed leniently from the `?sort=` query parameter: unknown values fall
/// back to sorting by title, matching the form's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSort {
    /// Title, ascending (default).
    Title,
    /// Owner rating, descending.
    Rating,
    /// Read date, most recent first.
    Date,
}

impl BookSort {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("rating") => Self::Rating,
            Some("date") => Self::Date,
            _ => Self::Title,
        }
    }
}

/// Parameters for creating a book, cover URL already resolved.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub rating: i32,
    pub read_date: DateTime<Utc>,
    pub notes: String,
    pub cover_url: String,
    pub shared: bool,
    pub user_id: i32,
}

impl CreateBookParams {
    /// Builds creation parameters from the form body.
    ///
    /// The cover URL is resolved separately (it requires an external lookup)
    /// and passed in. An unparseable `read_date` is a 400.
    pub fn from_dto(user_id: i32, cover_url: String, dto: CreateBookDto) -> Result<Self, AppError> {
        let shared = dto.is_shared();
        Ok(Self {
            title: dto.title,
            author: dto.author,
            rating: dto.rating,
            read_date: parse_read_date(dto.read_date.as_deref())?,
            notes: dto.notes.unwrap_or_default(),
            cover_url,
            shared,
            user_id,
        })
    }
}

/// Parameters for updating a book. The shared flag and owner are untouched.
#[derive(Debug, Clone)]
pub struct UpdateBookParams {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub rating: i32,
    pub read_date: DateTime<Utc>,
    pub notes: String,
    pub cover_url: String,
}

impl UpdateBookParams {
    pub fn from_dto(id: i32, dto: UpdateBookDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            title: dto.title,
            author: dto.author,
            rating: dto.rating,
            read_date: parse_read_date(dto.read_date.as_deref())?,
            notes: dto.notes.unwrap_or_default(),
            cover_url: dto.cover_url,
        })
    }
}

/// A shared book joined with its owner and rating aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedBook {
    pub book: Book,
    pub username: String,
    pub average_rating: f64,
}

impl SharedBook {
    pub fn into_dto(self) -> SharedBookDto {
        SharedBookDto {
            id: self.book.id,
            title: self.book.title,
            author: self.book.author,
            cover_url: self.book.cover_url,
            read_date: self.book.read_date,
            notes: self.book.notes,
            username: self.username,
            average_rating: self.average_rating,
        }
    }
}

/// Parses an optional `YYYY-MM-DD` form value, defaulting to now when blank.
fn parse_read_date(value: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(Utc::now()),
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest(format!("Invalid read date '{}'", raw)))?;
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid read date '{}'", raw)))?;
            Ok(DateTime::from_naive_utc_and_offset(midnight, Utc))
        }
    }
}
