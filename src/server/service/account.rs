//! Local account signup and credential verification.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, SignupOutcome, SignupParams, User},
    service::auth::password,
    util::validate,
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new local account.
    ///
    /// Duplicate usernames and emails outside the allowed provider are
    /// business rejections, reported in the `SignupOutcome` so the controller
    /// can flash them back to the signup page.
    pub async fn signup(&self, params: SignupParams) -> Result<SignupOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !validate::is_allowed_email(&params.email) {
            return Ok(SignupOutcome::EmailNotAllowed);
        }

        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Ok(SignupOutcome::DuplicateUsername);
        }

        let password_hash = password::hash_password(&params.password)
            .map_err(|err| AppError::InternalError(format!("Password hashing failed: {}", err)))?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email.trim().to_string(),
                password_hash,
            })
            .await?;

        Ok(SignupOutcome::Created(user))
    }

    /// Verifies a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both yield `Ok(None)`; the
    /// controller shows the same message for either, leaking nothing about
    /// which half was wrong.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password_input: &str,
    ) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Ok(None);
        };

        if password::verify_password(password_input, &user.password_hash) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
