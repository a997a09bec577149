use super::*;

/// Tests listing ratings with rater usernames.
///
/// Expected: one entry per rater, joined with their username
#[tokio::test]
async fn lists_ratings_with_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rater = factory::create_user(db).await?;
    let book = factory::create_shared_book(db, owner.id).await?;

    factory::create_rating(db, book.id, rater.id, 4).await?;

    let repo = RatingRepository::new(db);
    let ratings = repo.list_for_book(book.id).await?;

    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].username, rater.username);
    assert_eq!(ratings[0].rating, 4);

    Ok(())
}

/// Tests listing ratings for a book with none.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unrated_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let book = factory::create_shared_book(db, owner.id).await?;

    let repo = RatingRepository::new(db);
    let ratings = repo.list_for_book(book.id).await?;

    assert!(ratings.is_empty());

    Ok(())
}

/// Tests that ratings on other books are excluded.
///
/// Expected: only the queried book's ratings
#[tokio::test]
async fn excludes_other_books_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rater = factory::create_user(db).await?;
    let first = factory::create_shared_book(db, owner.id).await?;
    let second = factory::create_shared_book(db, owner.id).await?;

    factory::create_rating(db, first.id, rater.id, 5).await?;
    factory::create_rating(db, second.id, rater.id, 1).await?;

    let repo = RatingRepository::new(db);
    let ratings = repo.list_for_book(first.id).await?;

    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].rating, 5);

    Ok(())
}
