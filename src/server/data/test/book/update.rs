use super::*;

/// Tests updating a book's editable fields.
///
/// The shared flag and owner must survive the update untouched.
///
/// Expected: Ok(Some(Book)) with the new values
#[tokio::test]
async fn updates_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_shared_book(db, user.id).await?;

    let repo = BookRepository::new(db);
    let updated = repo
        .update(UpdateBookParams {
            id: book.id,
            title: "New Title".to_string(),
            author: "New Author".to_string(),
            rating: 1,
            read_date: Utc::now(),
            notes: "Revised.".to_string(),
            cover_url: "https://covers.example/b/id/2-M.jpg".to_string(),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.author, "New Author");
    assert_eq!(updated.rating, 1);
    assert_eq!(updated.notes, "Revised.");
    // Untouched columns
    assert!(updated.shared);
    assert_eq!(updated.user_id, user.id);

    Ok(())
}

/// Tests updating a book that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let updated = repo
        .update(UpdateBookParams {
            id: 999999,
            title: "Ghost".to_string(),
            author: "Nobody".to_string(),
            rating: 3,
            read_date: Utc::now(),
            notes: String::new(),
            cover_url: String::new(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
