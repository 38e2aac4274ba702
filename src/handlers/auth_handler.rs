use actix_web::{cookie::Cookie, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::extract::TOKEN_COOKIE,
    errors::AppError,
    models::dto::{
        request::SigninRequest,
        response::{MessageResponse, SigninResponse},
    },
};

#[post("/auth/signin")]
pub async fn signin(
    state: web::Data<AppState>,
    request: web::Json<SigninRequest>,
) -> Result<HttpResponse, AppError> {
    let (token, user) = state.auth_service.signin(request.into_inner()).await?;

    // Browser sessions ride on the cookie; API clients use the token from
    // the body as a bearer header.
    let cookie = Cookie::build(TOKEN_COOKIE, token.clone()).path("/").finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(SigninResponse { token, user }))
}

/// Stateless sign-out: discards the browser credential. Bearer tokens held
/// elsewhere stay valid until they expire (if expiry is configured at all).
#[post("/auth/signout")]
pub async fn signout() -> HttpResponse {
    let mut cookie = Cookie::build(TOKEN_COOKIE, "").path("/").finish();
    cookie.make_removal();

    HttpResponse::Ok().cookie(cookie).json(MessageResponse {
        message: "signed out".to_string(),
    })
}
