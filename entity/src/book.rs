use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A book recorded by a user.
///
/// `rating` is the owner's own score. Books are visible to other users only
/// when `shared` is set, in which case they appear in the public feed and can
/// collect per-user ratings in `book_rating`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub rating: i32,
    pub read_date: DateTime<Utc>,
    pub notes: String,
    pub cover_url: String,
    pub shared: bool,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::book_rating::Entity")]
    BookRating,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::book_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
