use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::auth::GoogleAuthService,
};

const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Subset of the Google userinfo response the application cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl<'a> GoogleAuthService<'a> {
    /// Completes the OAuth flow: exchanges the authorization code, fetches
    /// the Google profile, and returns the matching local user.
    ///
    /// A user whose email already exists is logged straight in; otherwise an
    /// account is created with the Google display name as username and the
    /// Google subject id occupying the password hash column, so the account
    /// can never be entered with a password.
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchangeFailed(err.to_string()))?;

        let profile = self.fetch_google_profile(&token).await?;

        if let Some(user) = user_repo.find_by_email(&profile.email).await? {
            return Ok(user);
        }

        let new_user = user_repo
            .create(CreateUserParams {
                username: profile.name,
                email: profile.email,
                password_hash: profile.id,
            })
            .await?;

        Ok(new_user)
    }

    /// Retrieves the Google profile using the provided access token.
    async fn fetch_google_profile(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleProfile, AppError> {
        let access_token = token.access_token().secret();

        let profile = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<GoogleProfile>()
            .await?;

        Ok(profile)
    }
}
