use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single user's rating of a book, as shown on the book detail page.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookRatingDto {
    pub username: String,
    pub rating: i32,
}

/// `POST /rate/{book_id}` form body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RateBookDto {
    pub rating: i32,
}
