use actix_web::web;

pub mod games;
pub mod health;

/// Register every route without the production-only wrappers.
///
/// `main.rs` mounts the same scopes but puts `ChannelGuard` in front of
/// `/api/games`; tests use this to exercise handlers directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
