use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDetailDto, BookDto, BookFormDefaultsDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::book::{BookSort, CreateBookParams, UpdateBookParams},
        service::{book::BookService, cover::CoverService},
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

#[derive(Deserialize)]
pub struct SortParams {
    /// Sort order: `title` (default), `rating`, or `date`. Unrecognized
    /// values fall back to the default.
    pub sort: Option<String>,
}

/// List the logged-in user's books.
///
/// Supports sorting by title (ascending, the default), rating (descending),
/// or read date (most recent first).
///
/// # Returns
/// - `200 OK` - The user's books in the requested order
/// - `303 See Other` - Not logged in, redirected to the login page
#[utoipa::path(
    get,
    path = "/home",
    tag = BOOK_TAG,
    params(
        ("sort" = Option<String>, Query, description = "Sort order: title, rating, or date")
    ),
    responses(
        (status = 200, description = "The user's books", body = Vec<BookDto>),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    params: Query<SortParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookService::new(&state.db);

    let sort = BookSort::from_query(params.0.sort.as_deref());
    let books = service.list_for_owner(user.id, sort).await?;

    Ok(Json(
        books.into_iter().map(|book| book.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single book with its ratings.
///
/// Visible to the owner always, and to other logged-in users only when the
/// book is shared. An invisible book is reported as missing.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book with its ratings", body = BookDetailDto),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 404, description = "Book not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookService::new(&state.db);

    let Some((book, ratings)) = service.get_visible(book_id, user.id).await? else {
        return Err(AppError::NotFound("Book not found".to_string()));
    };

    Ok(Json(BookDetailDto {
        book: book.into_dto(),
        ratings: ratings.into_iter().map(|rating| rating.into_dto()).collect(),
    }))
}

/// Serve the add-book form defaults.
#[utoipa::path(
    get,
    path = "/add",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Form defaults", body = BookFormDefaultsDto),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_add(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    Ok(Json(BookFormDefaultsDto::default()))
}

/// Add a book to the logged-in user's shelf.
///
/// Resolves the cover image from the submitted cover identifier before
/// saving; cover lookup failures fall back to a placeholder and never fail
/// the submission.
#[utoipa::path(
    post,
    path = "/add",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 303, description = "Book created, redirected to the book list"),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_add(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let cover_service = CoverService::new(state.http_client.clone());
    let cover_url = cover_service
        .fetch_cover_url(&payload.cover_id_type, &payload.cover_id)
        .await;

    let service = BookService::new(&state.db);

    // Convert DTO to server model
    let params = CreateBookParams::from_dto(user.id, cover_url, payload)?;

    service.create(params).await?;

    Ok(Redirect::to("/"))
}

/// Serve the edit form for a book the caller owns.
#[utoipa::path(
    get,
    path = "/edit/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "The book to edit", body = BookDto),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 403, description = "Book owned by another user", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_edit(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookService::new(&state.db);

    let book = service.require_owned(book_id, user.id).await?;

    Ok(Json(book.into_dto()))
}

/// Update a book the caller owns.
#[utoipa::path(
    post,
    path = "/edit/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 303, description = "Book updated, redirected to the book list"),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 403, description = "Book owned by another user", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_edit(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i32>,
    Form(payload): Form<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookService::new(&state.db);

    let params = UpdateBookParams::from_dto(book_id, payload)?;

    service.update_owned(user.id, params).await?;

    Ok(Redirect::to("/"))
}

/// Serve the delete confirmation payload for a book the caller owns.
#[utoipa::path(
    get,
    path = "/delete/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "The book pending deletion", body = BookDto),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 403, description = "Book owned by another user", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_delete(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookService::new(&state.db);

    let book = service.require_owned(book_id, user.id).await?;

    Ok(Json(book.into_dto()))
}

/// Delete a book the caller owns. Ratings on the book are removed with it.
#[utoipa::path(
    post,
    path = "/delete/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 303, description = "Book deleted, redirected to the book list"),
        (status = 403, description = "Book owned by another user", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_delete(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookService::new(&state.db);

    service.delete_owned(user.id, book_id).await?;

    Ok(Redirect::to("/"))
}
