//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to one concern, keeping session keys and value types in
//! a single place:
//!
//! - `AuthSession` - the authenticated user's id
//! - `CsrfSession` - CSRF token for the OAuth flow
//! - `FlashSession` - one-shot inline messages shown after a redirect

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_FLASH_MESSAGE: &str = "flash:message";

/// Authentication state: which user this session belongs to.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id, establishing a logged-in session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Returns the logged-in user's id, or `None` when not authenticated.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all session data. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF token storage for the Google OAuth flow.
///
/// The token is stored when the login redirect is issued and taken (removed)
/// when the callback validates it, so each token is usable once.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token, preventing replay.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// One-shot messages surviving a redirect, e.g. "username already exists".
///
/// A message is set right before redirecting to the login or signup page and
/// taken (removed) when that page is served, so it renders exactly once.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_message(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.session
            .insert(SESSION_FLASH_MESSAGE, message.into())
            .await?;
        Ok(())
    }

    /// Retrieves and removes the pending message, if any.
    pub async fn take_message(&self) -> Result<Option<String>, AppError> {
        let message = self.session.remove(SESSION_FLASH_MESSAGE).await?;
        Ok(message)
    }
}
