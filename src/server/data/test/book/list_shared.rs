use super::*;
use test_utils::factory::book::BookFactory;

/// Tests that only books with the shared flag appear in the feed.
///
/// Expected: Ok(Vec<SharedBook>) containing only shared books
#[tokio::test]
async fn excludes_private_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shared = factory::create_shared_book(db, user.id).await?;
    factory::create_book(db, user.id).await?;

    let repo = BookRepository::new(db);
    let feed = repo.list_shared().await?;

    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].book.id, shared.id);
    assert_eq!(feed[0].username, user.username);

    Ok(())
}

/// Tests that the feed is ordered by read date, most recent first.
///
/// Expected: shared books in descending read date order
#[tokio::test]
async fn orders_by_read_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let older = BookFactory::new(db, user.id)
        .shared(true)
        .read_date(now - Duration::days(10))
        .build()
        .await?;
    let newer = BookFactory::new(db, user.id)
        .shared(true)
        .read_date(now)
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let feed = repo.list_shared().await?;

    let ids: Vec<i32> = feed.iter().map(|entry| entry.book.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests the rating aggregate across multiple raters.
///
/// Expected: average of all ratings on the book
#[tokio::test]
async fn averages_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first_rater = factory::create_user(db).await?;
    let second_rater = factory::create_user(db).await?;
    let book = factory::create_shared_book(db, owner.id).await?;

    factory::create_rating(db, book.id, first_rater.id, 5).await?;
    factory::create_rating(db, book.id, second_rater.id, 2).await?;

    let repo = BookRepository::new(db);
    let feed = repo.list_shared().await?;

    assert_eq!(feed.len(), 1);
    assert!((feed[0].average_rating - 3.5).abs() < f64::EPSILON);

    Ok(())
}

/// Tests that a shared book without ratings averages to zero.
///
/// Expected: average_rating of 0.0
#[tokio::test]
async fn unrated_book_averages_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_shared_book(db, user.id).await?;

    let repo = BookRepository::new(db);
    let feed = repo.list_shared().await?;

    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].average_rating, 0.0);

    Ok(())
}
