use super::*;
use test_utils::factory::book::BookFactory;

/// Tests that the listing only returns the owner's books.
///
/// Expected: Ok(Vec<Book>) containing only the first user's books
#[tokio::test]
async fn excludes_other_users_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_book(db, owner.id).await?;
    factory::create_book(db, other.id).await?;

    let repo = BookRepository::new(db);
    let books = repo.list_by_owner(owner.id, BookSort::Title).await?;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, mine.id);

    Ok(())
}

/// Tests the default sort: title ascending.
///
/// Expected: books in alphabetical order by title
#[tokio::test]
async fn sorts_by_title_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    BookFactory::new(db, user.id).title("Zorro").build().await?;
    BookFactory::new(db, user.id).title("Anna Karenina").build().await?;
    BookFactory::new(db, user.id).title("Moby Dick").build().await?;

    let repo = BookRepository::new(db);
    let books = repo.list_by_owner(user.id, BookSort::Title).await?;

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Anna Karenina", "Moby Dick", "Zorro"]);

    Ok(())
}

/// Tests sorting by the owner's rating, highest first.
///
/// Expected: books in descending rating order
#[tokio::test]
async fn sorts_by_rating_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    BookFactory::new(db, user.id).rating(2).build().await?;
    BookFactory::new(db, user.id).rating(5).build().await?;
    BookFactory::new(db, user.id).rating(4).build().await?;

    let repo = BookRepository::new(db);
    let books = repo.list_by_owner(user.id, BookSort::Rating).await?;

    let ratings: Vec<i32> = books.iter().map(|b| b.rating).collect();
    assert_eq!(ratings, vec![5, 4, 2]);

    Ok(())
}

/// Tests sorting by read date, most recent first.
///
/// Expected: books in descending read date order
#[tokio::test]
async fn sorts_by_read_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let oldest = BookFactory::new(db, user.id)
        .read_date(now - Duration::days(30))
        .build()
        .await?;
    let newest = BookFactory::new(db, user.id).read_date(now).build().await?;
    let middle = BookFactory::new(db, user.id)
        .read_date(now - Duration::days(7))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo.list_by_owner(user.id, BookSort::Date).await?;

    let ids: Vec<i32> = books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}
