use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateProjectRequest, UpdateProjectRequest},
};

// Public read, admin-only write: the deliberate security model for this
// content type.

#[get("/api/projects")]
pub async fn list_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.project_service.list().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[get("/api/projects/{projectId}")]
pub async fn read_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_service.get(&id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[post("/api/projects")]
pub async fn create_project(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    request: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let project = state.project_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(project))
}

#[put("/api/projects/{projectId}")]
pub async fn update_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: Result<AuthenticatedUser, AppError>,
    request: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    // Id resolution answers before the gate: an unknown id is 404 even to
    // an anonymous caller.
    state.project_service.get(&id).await?;

    let auth = auth?;
    require_admin(&auth.0)?;

    let project = state
        .project_service
        .update(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

#[delete("/api/projects/{projectId}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.project_service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/projects")]
pub async fn delete_projects(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.project_service.delete_many().await?;
    Ok(HttpResponse::Ok().json(response))
}
