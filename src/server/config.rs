use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = std::env::var("APP_URL")
            .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?;

        // GOOGLE_REDIRECT_URL only needs setting when the callback is not
        // served under APP_URL (e.g. behind a path-rewriting proxy).
        let google_redirect_url = std::env::var("GOOGLE_REDIRECT_URL")
            .unwrap_or_else(|_| default_redirect_url(&app_url));

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            google_client_id: std::env::var("GOOGLE_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_ID".to_string()))?,
            google_client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_SECRET".to_string()))?,
            google_redirect_url,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
        })
    }
}

/// The OAuth callback route under the application base URL.
fn default_redirect_url(app_url: &str) -> String {
    format!("{}/auth/google/callback", app_url.trim_end_matches('/'))
}
