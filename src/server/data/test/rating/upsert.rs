use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests inserting a fresh rating.
///
/// Expected: Ok with one rating row for the (book, user) pair
#[tokio::test]
async fn inserts_new_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rater = factory::create_user(db).await?;
    let book = factory::create_shared_book(db, owner.id).await?;

    let repo = RatingRepository::new(db);
    repo.upsert(RateBookParams {
        book_id: book.id,
        user_id: rater.id,
        rating: 4,
    })
    .await?;

    let row = entity::prelude::BookRating::find()
        .filter(entity::book_rating::Column::BookId.eq(book.id))
        .filter(entity::book_rating::Column::UserId.eq(rater.id))
        .one(db)
        .await?;

    assert!(row.is_some());
    assert_eq!(row.unwrap().rating, 4);

    Ok(())
}

/// Tests that rating the same book again replaces the existing row.
///
/// Verifies that a user holds at most one rating per book: the second
/// submission updates the value in place instead of inserting a duplicate.
///
/// Expected: one row with the latest rating value
#[tokio::test]
async fn updates_existing_rating_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rater = factory::create_user(db).await?;
    let book = factory::create_shared_book(db, owner.id).await?;

    let repo = RatingRepository::new(db);
    repo.upsert(RateBookParams {
        book_id: book.id,
        user_id: rater.id,
        rating: 2,
    })
    .await?;
    repo.upsert(RateBookParams {
        book_id: book.id,
        user_id: rater.id,
        rating: 5,
    })
    .await?;

    let count = entity::prelude::BookRating::find()
        .filter(entity::book_rating::Column::BookId.eq(book.id))
        .filter(entity::book_rating::Column::UserId.eq(rater.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    let row = entity::prelude::BookRating::find()
        .filter(entity::book_rating::Column::BookId.eq(book.id))
        .filter(entity::book_rating::Column::UserId.eq(rater.id))
        .one(db)
        .await?;
    assert_eq!(row.unwrap().rating, 5);

    Ok(())
}

/// Tests that ratings from different users on the same book coexist.
///
/// Expected: one row per rater
#[tokio::test]
async fn keeps_ratings_from_different_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first_rater = factory::create_user(db).await?;
    let second_rater = factory::create_user(db).await?;
    let book = factory::create_shared_book(db, owner.id).await?;

    let repo = RatingRepository::new(db);
    repo.upsert(RateBookParams {
        book_id: book.id,
        user_id: first_rater.id,
        rating: 3,
    })
    .await?;
    repo.upsert(RateBookParams {
        book_id: book.id,
        user_id: second_rater.id,
        rating: 5,
    })
    .await?;

    let count = entity::prelude::BookRating::find()
        .filter(entity::book_rating::Column::BookId.eq(book.id))
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}
