//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let book = factory::book::create_book(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let book = factory::book::BookFactory::new(&db, user.id)
//!     .title("The Hobbit")
//!     .rating(5)
//!     .shared(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `book` - Create book entities
//! - `book_rating` - Create per-user book rating entities
//! - `helpers` - ID generation shared across factories

pub mod book;
pub mod book_rating;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use book::{create_book, create_shared_book};
pub use book_rating::create_rating;
pub use user::create_user;
