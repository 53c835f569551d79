// Route exports
pub mod matches;

use actix_web::web;

pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(matches::health_check))
        .service(web::scope("/api").configure(matches::configure));
}
