use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a book.
///
/// Expected: Ok(true) with the row gone
#[tokio::test]
async fn deletes_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db, user.id).await?;

    let repo = BookRepository::new(db);
    let deleted = repo.delete(book.id).await?;

    assert!(deleted);

    let check = entity::prelude::Book::find_by_id(book.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a non-existent book.
///
/// Expected: Ok(false), no error
#[tokio::test]
async fn reports_no_row_for_nonexistent_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let deleted = repo.delete(999999).await?;

    assert!(!deleted);

    Ok(())
}
