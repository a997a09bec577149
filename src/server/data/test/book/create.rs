use super::*;

/// Tests creating a book for a user.
///
/// Expected: Ok(Book) with matching fields and generated id
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BookRepository::new(db);
    let book = repo
        .create(CreateBookParams {
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            rating: 5,
            read_date: Utc::now(),
            notes: "A classic.".to_string(),
            cover_url: "https://covers.example/b/id/1-M.jpg".to_string(),
            shared: true,
            user_id: user.id,
        })
        .await?;

    assert!(book.id > 0);
    assert_eq!(book.title, "The Hobbit");
    assert_eq!(book.author, "J.R.R. Tolkien");
    assert_eq!(book.rating, 5);
    assert!(book.shared);
    assert_eq!(book.user_id, user.id);

    Ok(())
}
