use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session; the caller is not logged in.
    ///
    /// Results in a redirect to the login page.
    #[error("No authenticated user in session")]
    NotLoggedIn,

    /// The session references a user id that no longer exists.
    ///
    /// Treated the same as not being logged in: the stale session cannot be
    /// trusted, so the caller is redirected to the login page.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The state token in the callback URL does not match the token stored in
    /// the session. The login attempt is abandoned and the caller redirected
    /// back to the login page.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),

    /// The caller tried to modify a book owned by another user.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} does not own book {book_id}")]
    NotBookOwner { user_id: i32, book_id: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => Redirect::to("/login").into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session user {} missing from database", user_id);
                Redirect::to("/login").into_response()
            }
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => {
                tracing::debug!("OAuth login failed: {}", self);
                Redirect::to("/login").into_response()
            }
            Self::NotBookOwner { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to modify this book".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
