//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and to DTOs at the controller boundary, keeping business logic free of
//! database and wire-format concerns.

pub mod book;
pub mod cover;
pub mod rating;
pub mod user;
