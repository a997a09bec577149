//! Database repository layer.
//!
//! Repositories perform all database operations through SeaORM entity models
//! and return domain models, keeping entity types out of the business logic
//! layer.

pub mod book;
pub mod rating;
pub mod user;

#[cfg(test)]
mod test;
