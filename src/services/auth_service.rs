use crate::{
    auth::{
        AuthError, TokenSigner,
        password::{hash_password, verify_password},
    },
    db::dao::UserDao,
    error::AppError,
    services::require_non_blank,
};

#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AuthService<'a> {
    users: UserDao,
    tokens: &'a TokenSigner,
}

impl<'a> AuthService<'a> {
    pub fn new(users: UserDao, tokens: &'a TokenSigner) -> Self {
        Self { users, tokens }
    }

    pub async fn sign_up(&self, input: SignUpInput) -> Result<i32, AppError> {
        require_non_blank(&input.name, "name must not be empty")?;
        require_non_blank(&input.username, "username must not be empty")?;
        require_non_blank(&input.password, "password must not be empty")?;

        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(AppError::conflict("username already taken"));
        }

        let password_hash = hash_password(&input.password)?;
        let id = self
            .users
            .create_user(&input.name, &input.username, &password_hash)
            .await?;
        tracing::info!(user_id = id, "user signed up");
        Ok(id)
    }

    /// Checks the credentials and returns a signed access token.
    pub async fn issue(&self, username: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.tokens.issue(user.id)?)
    }

    pub fn validate(&self, token: &str) -> Result<i32, AuthError> {
        self.tokens.validate(token)
    }
}
