use super::*;

/// Tests finding an existing book by id.
///
/// Expected: Ok(Some(Book)) with matching data
#[tokio::test]
async fn finds_existing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_book(db, user.id).await?;

    let repo = BookRepository::new(db);
    let book = repo.find_by_id(created.id).await?;

    assert!(book.is_some());
    let book = book.unwrap();
    assert_eq!(book.id, created.id);
    assert_eq!(book.title, created.title);

    Ok(())
}

/// Tests querying for a non-existent book id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = repo.find_by_id(999999).await?;

    assert!(book.is_none());

    Ok(())
}
