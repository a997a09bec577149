use sea_orm::entity::prelude::*;

/// Application user account.
///
/// Created at local signup or on first Google login. For Google-created
/// accounts the `password_hash` column holds the Google subject id, which can
/// never verify as an Argon2 hash.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Book,
    #[sea_orm(has_many = "super::book_rating::Entity")]
    BookRating,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::book_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
