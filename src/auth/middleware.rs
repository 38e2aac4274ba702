use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::{
    auth::{extract::extract_token, Claims, TokenService},
    errors::AppError,
};

/// Authentication gate. Routes opt in by taking this extractor; extraction
/// runs the credential lookup and token verification, and short-circuits
/// with 401 before the handler body runs. Public routes simply do not take
/// it.
///
/// Handlers that must resolve a resource id before the gate (404 before 401)
/// take `Result<AuthenticatedUser, AppError>` instead and propagate the
/// error after the lookup.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(AuthenticatedUser))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("token service not configured".to_string()))?;

    let token = extract_token(req)
        .ok_or_else(|| AppError::Unauthorized("No authorization token was found".to_string()))?;

    token_service.verify(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use secrecy::SecretString;

    use crate::models::domain::User;

    fn token_service() -> TokenService {
        TokenService::new(&SecretString::from("test_jwt_secret_key".to_string()), None)
    }

    #[actix_web::test]
    async fn test_gate_accepts_valid_bearer_token() {
        let service = token_service();
        let user = User::test_user("Ana", "ana@example.com");
        let token = service.issue(&user).unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(service))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let auth = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(auth.0.sub, user.id_hex());
    }

    #[actix_web::test]
    async fn test_gate_accepts_cookie_token() {
        let service = token_service();
        let user = User::test_user("Ana", "ana@example.com");
        let token = service.issue(&user).unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(service))
            .cookie(actix_web::cookie::Cookie::new("t", token))
            .to_http_request();

        assert!(AuthenticatedUser::extract(&req).await.is_ok());
    }

    #[actix_web::test]
    async fn test_gate_rejects_missing_token() {
        let req = TestRequest::default()
            .app_data(web::Data::new(token_service()))
            .to_http_request();

        match AuthenticatedUser::extract(&req).await {
            Err(AppError::Unauthorized(_)) => {}
            _ => panic!("expected Unauthorized"),
        }
    }

    #[actix_web::test]
    async fn test_gate_rejects_garbage_token() {
        let req = TestRequest::default()
            .app_data(web::Data::new(token_service()))
            .insert_header(("Authorization", "Bearer garbage"))
            .to_http_request();

        match AuthenticatedUser::extract(&req).await {
            Err(AppError::Unauthorized(_)) => {}
            _ => panic!("expected Unauthorized"),
        }
    }
}
