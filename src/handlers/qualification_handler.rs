use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateQualificationRequest, UpdateQualificationRequest},
};

#[get("/api/qualifications")]
pub async fn list_qualifications(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let qualifications = state.qualification_service.list().await?;
    Ok(HttpResponse::Ok().json(qualifications))
}

#[get("/api/qualifications/{qualificationId}")]
pub async fn read_qualification(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let qualification = state.qualification_service.get(&id).await?;
    Ok(HttpResponse::Ok().json(qualification))
}

#[post("/api/qualifications")]
pub async fn create_qualification(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    request: web::Json<CreateQualificationRequest>,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let qualification = state
        .qualification_service
        .create(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(qualification))
}

#[put("/api/qualifications/{qualificationId}")]
pub async fn update_qualification(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: Result<AuthenticatedUser, AppError>,
    request: web::Json<UpdateQualificationRequest>,
) -> Result<HttpResponse, AppError> {
    state.qualification_service.get(&id).await?;

    let auth = auth?;
    require_admin(&auth.0)?;

    let qualification = state
        .qualification_service
        .update(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(qualification))
}

#[delete("/api/qualifications/{qualificationId}")]
pub async fn delete_qualification(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.qualification_service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/qualifications")]
pub async fn delete_qualifications(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.qualification_service.delete_many().await?;
    Ok(HttpResponse::Ok().json(response))
}
