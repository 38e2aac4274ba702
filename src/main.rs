use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use portfolio_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let token_service = state.token_service.clone();

    log::info!("server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(token_service.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
