use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use faq_bot::config::Settings;
use faq_bot::routes::{self, chat::AppState};
use tracing::{info, error};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    faq_bot::logging::init();

    info!("Starting FAQ bot service...");

    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let bot = faq_bot::app::build_bot(&settings).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let app_state = AppState { bot };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
