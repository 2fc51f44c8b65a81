pub mod config;
pub mod error;
pub mod events;
pub mod health;
pub mod middleware;

use actix_web::web;

/// API routes shared by the server binary and the service tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_check)
        .configure(events::controller::configure);
}
