use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, book, shared},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    auth::get_signup,
    auth::post_signup,
    auth::get_login,
    auth::post_login,
    auth::logout,
    auth::google_login,
    auth::google_callback,
    book::home,
    book::get_book,
    book::get_add,
    book::post_add,
    book::get_edit,
    book::post_edit,
    book::get_delete,
    book::post_delete,
    shared::shared_feed,
    shared::rate_book,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::home))
        .route("/home", get(book::home))
        .route("/books/{id}", get(book::get_book))
        .route("/add", get(book::get_add).post(book::post_add))
        .route("/edit/{id}", get(book::get_edit).post(book::post_edit))
        .route(
            "/delete/{id}",
            get(book::get_delete).post(book::post_delete),
        )
        .route("/shared", get(shared::shared_feed))
        .route("/rate/{book_id}", post(shared::rate_book))
        .route("/signup", get(auth::get_signup).post(auth::post_signup))
        .route("/login", get(auth::get_login).post(auth::post_login))
        .route("/logout", get(auth::logout))
        .route("/auth/google", get(auth::google_login))
        .route("/auth/google/callback", get(auth::google_callback))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
