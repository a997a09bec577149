use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_book_table::Book,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Uniqueness of (book_id, user_id) is handled by upsert logic in the
        // rating repository, not by a table constraint.
        manager
            .create_table(
                Table::create()
                    .table(BookRating::Table)
                    .if_not_exists()
                    .col(pk_auto(BookRating::Id))
                    .col(integer(BookRating::BookId))
                    .col(integer(BookRating::UserId))
                    .col(integer(BookRating::Rating))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_rating_book_id")
                            .from(BookRating::Table, BookRating::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_rating_user_id")
                            .from(BookRating::Table, BookRating::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookRating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookRating {
    Table,
    Id,
    BookId,
    UserId,
    Rating,
}
