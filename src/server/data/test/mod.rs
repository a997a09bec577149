mod book;
mod rating;
mod user;
