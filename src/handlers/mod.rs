pub mod auth_handler;
pub mod contact_handler;
pub mod project_handler;
pub mod qualification_handler;
pub mod user_handler;

use actix_web::{get, web, HttpResponse};

use crate::errors::AppError;

#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to My portfolio"
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Registers every route. Shared between the server binary and the HTTP
/// test harness so both exercise the same guard wiring.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Unparseable request bodies must come back in the same `{error}` JSON
    // shape as every other failure, not actix's plain-text default.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));

    cfg.service(welcome)
        .service(health_check)
        .service(auth_handler::signin)
        .service(auth_handler::signout)
        .service(user_handler::create_user)
        .service(user_handler::list_users)
        .service(user_handler::read_user)
        .service(user_handler::update_user)
        .service(user_handler::delete_user)
        .service(project_handler::list_projects)
        .service(project_handler::read_project)
        .service(project_handler::create_project)
        .service(project_handler::update_project)
        .service(project_handler::delete_project)
        .service(project_handler::delete_projects)
        .service(qualification_handler::list_qualifications)
        .service(qualification_handler::read_qualification)
        .service(qualification_handler::create_qualification)
        .service(qualification_handler::update_qualification)
        .service(qualification_handler::delete_qualification)
        .service(qualification_handler::delete_qualifications)
        .service(contact_handler::list_contacts)
        .service(contact_handler::read_contact)
        .service(contact_handler::create_contact)
        .service(contact_handler::update_contact)
        .service(contact_handler::delete_contact)
        .service(contact_handler::delete_contacts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_welcome_message() {
        let app = test::init_service(App::new().service(welcome)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Welcome to My portfolio");
    }
}
