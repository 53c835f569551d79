use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use study_match::config::Settings;
use study_match::core::{MatchGenerator, Roster};
use study_match::error::json_config;
use study_match::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Study Match service...");

    let roster = match settings.matching.roster.clone() {
        Some(names) => Roster::new(names).map_err(|e| {
            error!("Invalid roster in configuration: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
        })?,
        None => Roster::default(),
    };

    info!("Roster loaded with {} names", roster.len());

    let app_state = AppState {
        generator: MatchGenerator::new(roster),
        processing_delay: settings.matching.processing_delay(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!(
        "Starting HTTP server on {}:{} (processing delay {}ms)",
        host, port, settings.matching.processing_delay_ms
    );

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(json_config())
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
