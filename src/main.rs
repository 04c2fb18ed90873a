use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizforge_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).map_err(std::io::Error::other)?;

    log::info!("starting QuizForge server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::multipart_form_config())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::generate_quiz)
            .service(handlers::score_quiz)
    })
    .bind((host, port))?
    .run()
    .await
}
