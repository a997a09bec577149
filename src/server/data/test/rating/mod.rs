use crate::server::{data::rating::RatingRepository, model::rating::RateBookParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_for_book;
mod upsert;
