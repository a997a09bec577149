use crate::server::{
    data::book::BookRepository,
    model::book::{BookSort, CreateBookParams, UpdateBookParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod list_by_owner;
mod list_shared;
mod update;
