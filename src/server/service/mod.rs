//! Business logic between controllers and repositories.

pub mod account;
pub mod auth;
pub mod book;
pub mod cover;
pub mod rating;
