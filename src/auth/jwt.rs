use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::User,
};

/// Stateless session token codec. Signing is HS256 over the shared secret;
/// verification is pure, so concurrent requests share this service without
/// locks.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: Option<i64>,
}

impl TokenService {
    pub fn new(secret: &SecretString, expiration_hours: Option<i64>) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::default();
        if expiration_hours.is_none() {
            // Historic tokens carry no exp claim; only validate expiry when
            // the deployment opts into one.
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
        }

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            expiration_hours,
        }
    }

    pub fn issue(&self, user: &User) -> AppResult<String> {
        if user.id.is_none() {
            return Err(AppError::InternalError(
                "cannot issue a token for an unsaved user".to_string(),
            ));
        }

        let claims = Claims::new(user, self.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create token: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::Unauthorized("Token signature is invalid".to_string())
                }
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::Base64(_)
                | jsonwebtoken::errors::ErrorKind::Json(_)
                | jsonwebtoken::errors::ErrorKind::Utf8(_) => {
                    AppError::Unauthorized("Malformed token".to_string())
                }
                _ => AppError::Unauthorized(format!("Token validation failed: {}", e)),
            })
    }
}
