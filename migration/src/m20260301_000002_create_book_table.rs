use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string(Book::Title))
                    .col(string(Book::Author))
                    .col(integer(Book::Rating))
                    .col(timestamp_with_time_zone(Book::ReadDate))
                    .col(text(Book::Notes))
                    .col(string(Book::CoverUrl))
                    .col(boolean(Book::Shared).default(false))
                    .col(integer(Book::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_user_id")
                            .from(Book::Table, Book::UserId)
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
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    Title,
    Author,
    Rating,
    ReadDate,
    Notes,
    CoverUrl,
    Shared,
    UserId,
}
