//! SeaORM entity models for the bookshelf schema.

pub mod book;
pub mod book_rating;
pub mod user;

pub mod prelude;
