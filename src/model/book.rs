use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::rating::BookRatingDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookDto {
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

/// Book detail payload: the book itself plus every per-user rating left on it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookDetailDto {
    pub book: BookDto,
    pub ratings: Vec<BookRatingDto>,
}

/// Defaults served by `GET /add` so clients can pre-populate the form.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookFormDefaultsDto {
    pub title: String,
    pub author: String,
    pub read_date: String,
    pub rating: String,
    pub cover_id: String,
    pub cover_id_type: String,
    pub notes: String,
}

impl Default for BookFormDefaultsDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            read_date: String::new(),
            rating: String::new(),
            cover_id: String::new(),
            cover_id_type: "isbn".to_string(),
            notes: String::new(),
        }
    }
}

/// `POST /add` form body.
///
/// `shared` is an HTML checkbox: present with the value `on` when checked,
/// absent otherwise. `read_date` is an optional `YYYY-MM-DD` string; when
/// empty the current date is recorded.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub rating: i32,
    #[serde(default)]
    pub read_date: Option<String>,
    pub cover_id: String,
    pub cover_id_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub shared: Option<String>,
}

impl CreateBookDto {
    /// Whether the `shared` checkbox was ticked.
    pub fn is_shared(&self) -> bool {
        self.shared.as_deref() == Some("on")
    }
}

/// `POST /edit/{id}` form body. The cover URL is edited directly rather than
/// re-resolved from a cover identifier.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateBookDto {
    pub title: String,
    pub author: String,
    pub rating: i32,
    #[serde(default)]
    pub read_date: Option<String>,
    pub cover_url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Entry in the public shared feed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SharedBookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub read_date: DateTime<Utc>,
    pub notes: String,
    /// Username of the book's owner.
    pub username: String,
    /// Average of all per-user ratings, 0.0 when the book has none.
    pub average_rating: f64,
}
