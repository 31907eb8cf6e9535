use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use conduct_server::{
    app_state::AppState,
    auth::{AuthMiddleware, JwtService},
    config::Config,
    handlers::{
        export_handler, grading_handler, health_handler, notification_handler, scoring_handler,
        upload_handler, user_handler,
    },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let state = Arc::new(
        AppState::new(config)
            .await
            .expect("failed to initialize application state"),
    );

    log::info!(
        "starting HTTP server on {}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(health_handler::health_check)
            .service(health_handler::health_check_ready)
            .service(health_handler::health_check_live)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .service(scoring_handler::get_scores)
                    .service(scoring_handler::save_scores)
                    .service(grading_handler::list_for_grading)
                    .service(grading_handler::grade_score)
                    .service(export_handler::export_csv)
                    .service(upload_handler::upload_evidence)
                    .service(notification_handler::send_notification)
                    .service(notification_handler::list_notifications)
                    .service(user_handler::get_user)
                    .service(user_handler::get_students)
                    .service(user_handler::create_student),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
