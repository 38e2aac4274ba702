use std::sync::Arc;

use crate::{
    auth::TokenService,
    errors::{AppError, AppResult},
    models::dto::{request::SigninRequest, response::UserDto},
    repositories::UserRepository,
};

/// Sign-in flow: credential check against the user store, then token issue.
/// Sign-out is purely a client-side credential discard; no server state is
/// kept, so nothing is invalidated here.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    pub async fn signin(&self, request: SigninRequest) -> AppResult<(String, UserDto)> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

        if !user.authenticate(&request.password) {
            return Err(AppError::Unauthorized(
                "Email and password don't match.".to_string(),
            ));
        }

        let token = self.tokens.issue(&user)?;
        Ok((token, user.into()))
    }
}
