use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_owner_or_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateUserRequest, UpdateUserRequest},
};

#[post("/api/users")]
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.signup(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[get("/api/users")]
pub async fn list_users(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/api/users/{userId}")]
pub async fn read_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get(&id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/api/users/{userId}")]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: Result<AuthenticatedUser, AppError>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.find_record(&id).await?;

    let auth = auth?;
    require_owner_or_admin(&auth.0, &profile.id_hex())?;

    let mut request = request.into_inner();
    // A non-admin owner may edit their profile but not their own privilege.
    if !auth.0.is_admin {
        request.is_admin = None;
    }

    let user = state.user_service.update(&id, request).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/api/users/{userId}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: Result<AuthenticatedUser, AppError>,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.find_record(&id).await?;

    let auth = auth?;
    require_owner_or_admin(&auth.0, &profile.id_hex())?;

    let response = state.user_service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}
