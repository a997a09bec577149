pub use super::book::Entity as Book;
pub use super::book_rating::Entity as BookRating;
pub use super::user::Entity as User;
