//! Data transfer objects serialized over the HTTP API.
//!
//! These types define the wire format of requests (form bodies) and responses
//! (JSON). Domain models in `server::model` are converted to DTOs at the
//! controller boundary.

pub mod api;
pub mod book;
pub mod rating;
pub mod user;
