use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthPageDto, LoginDto, SignupDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession, FlashSession},
        model::user::{SignupOutcome, SignupParams},
        service::{account::AccountService, auth::GoogleAuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google SSO for token exchange.
    pub code: String,
}

/// Serve the signup page payload.
///
/// Returns any pending flash message from a previous failed signup attempt.
/// The message is consumed by this request and will not appear again.
#[utoipa::path(
    get,
    path = "/signup",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signup page payload", body = AuthPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_signup(session: Session) -> Result<impl IntoResponse, AppError> {
    let message = FlashSession::new(&session).take_message().await?;

    Ok(Json(AuthPageDto { message }))
}

/// Register a new account.
///
/// Rejected signups (duplicate username, disallowed email provider) redirect
/// back to the signup page with a flash message; a successful signup logs the
/// new user in and redirects to the book list.
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 303, description = "Account created and logged in, or rejected with a flash message"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_signup(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);

    let outcome = account_service
        .signup(SignupParams {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let user = match outcome {
        SignupOutcome::Created(user) => user,
        SignupOutcome::DuplicateUsername => {
            FlashSession::new(&session)
                .set_message("Username already exists. Try logging in or pick a different one.")
                .await?;
            return Ok(Redirect::to("/signup"));
        }
        SignupOutcome::EmailNotAllowed => {
            FlashSession::new(&session)
                .set_message("Signup requires a gmail.com email address.")
                .await?;
            return Ok(Redirect::to("/signup"));
        }
    };

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::to("/"))
}

/// Serve the login page payload.
///
/// Returns any pending flash message from a previous failed login attempt.
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login page payload", body = AuthPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_login(session: Session) -> Result<impl IntoResponse, AppError> {
    let message = FlashSession::new(&session).take_message().await?;

    Ok(Json(AuthPageDto { message }))
}

/// Log in with username and password.
///
/// Unknown usernames and wrong passwords produce the same flash message, so
/// the response does not reveal which half failed.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 303, description = "Logged in, or redirected back with a flash message"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_login(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);

    let Some(user) = account_service
        .verify_credentials(&payload.username, &payload.password)
        .await?
    else {
        FlashSession::new(&session)
            .set_message("Incorrect username or password.")
            .await?;
        return Ok(Redirect::to("/login"));
    };

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::to("/"))
}

/// End the current session.
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirected to the front page"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::to("/"))
}

/// Begin the Google OAuth flow.
///
/// Stores a fresh CSRF token in the session and redirects to Google's
/// consent page.
#[utoipa::path(
    get,
    path = "/auth/google",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Google consent page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the Google OAuth flow.
///
/// Validates the CSRF state against the session, exchanges the authorization
/// code, resolves the local account (creating one on first login), and
/// establishes the session.
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Authorization code from Google")
    ),
    responses(
        (status = 303, description = "Logged in, redirected to the book list"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.0.state).await?;

    let user = auth_service.callback(params.0.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::to("/"))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
