use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        book::SharedBookDto,
        rating::RateBookDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::rating::RateBookParams,
        service::{book::BookService, rating::RatingService},
        state::AppState,
    },
};

/// Tag for grouping shared-feed endpoints in OpenAPI documentation
pub static SHARED_TAG: &str = "shared";

/// The public shared feed.
///
/// Lists every shared book with its owner's username and the average of all
/// ratings left on it, most recently read first. No login required.
#[utoipa::path(
    get,
    path = "/shared",
    tag = SHARED_TAG,
    responses(
        (status = 200, description = "All shared books", body = Vec<SharedBookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn shared_feed(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let books = service.shared_feed().await?;

    Ok(Json(
        books.into_iter().map(|book| book.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Rate a shared book.
///
/// Each user holds at most one rating per book; rating again replaces the
/// previous value. Owners may rate their own books.
#[utoipa::path(
    post,
    path = "/rate/{book_id}",
    tag = SHARED_TAG,
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    request_body = RateBookDto,
    responses(
        (status = 303, description = "Rating recorded, redirected to the book page"),
        (status = 400, description = "Rating out of range", body = ErrorDto),
        (status = 404, description = "Book not found or not shared", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rate_book(
    State(state): State<AppState>,
    session: Session,
    Path(book_id): Path<i32>,
    Form(payload): Form<RateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = RatingService::new(&state.db);

    service
        .rate(RateBookParams {
            book_id,
            user_id: user.id,
            rating: payload.rating,
        })
        .await?;

    Ok(Redirect::to(&format!("/books/{}", book_id)))
}
