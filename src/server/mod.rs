//! Backend implementation for the bookshelf application.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and typed session wrappers
//!
//! Supporting modules provide application infrastructure: `config` (environment
//! configuration), `state` (shared application state), `startup` (database,
//! session and client initialization), and `router` (route table plus OpenAPI
//! documentation).
//!
//! A typical request flows router → middleware guard → controller → service →
//! repository, with domain models converted to DTOs on the way back out.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
