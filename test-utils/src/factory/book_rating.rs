//! Book rating factory for creating per-user rating rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a rating row for the given book and user.
///
/// # Example
///
/// ```rust,ignore
/// let rating = create_rating(&db, book.id, user.id, 4).await?;
/// ```
pub async fn create_rating(
    db: &DatabaseConnection,
    book_id: i32,
    user_id: i32,
    rating: i32,
) -> Result<entity::book_rating::Model, DbErr> {
    entity::book_rating::ActiveModel {
        id: ActiveValue::NotSet,
        book_id: ActiveValue::Set(book_id),
        user_id: ActiveValue::Set(user_id),
        rating: ActiveValue::Set(rating),
    }
    .insert(db)
    .await
}
