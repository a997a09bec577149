use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_email;
mod find_by_id;
mod find_by_username;
