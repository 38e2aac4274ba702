use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateContactRequest, UpdateContactRequest},
};

#[get("/api/contacts")]
pub async fn list_contacts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let contacts = state.contact_service.list().await?;
    Ok(HttpResponse::Ok().json(contacts))
}

#[get("/api/contacts/{contactId}")]
pub async fn read_contact(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let contact = state.contact_service.get(&id).await?;
    Ok(HttpResponse::Ok().json(contact))
}

#[post("/api/contacts")]
pub async fn create_contact(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    request: web::Json<CreateContactRequest>,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let contact = state.contact_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(contact))
}

#[put("/api/contacts/{contactId}")]
pub async fn update_contact(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: Result<AuthenticatedUser, AppError>,
    request: web::Json<UpdateContactRequest>,
) -> Result<HttpResponse, AppError> {
    state.contact_service.get(&id).await?;

    let auth = auth?;
    require_admin(&auth.0)?;

    let contact = state
        .contact_service
        .update(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(contact))
}

#[delete("/api/contacts/{contactId}")]
pub async fn delete_contact(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.contact_service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/contacts")]
pub async fn delete_contacts(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.contact_service.delete_many().await?;
    Ok(HttpResponse::Ok().json(response))
}
