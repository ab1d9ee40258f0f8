use actix_web::{web, App, HttpServer};
use bingo_backend::config::channel::ChannelConfig;
use bingo_backend::config::db::DbSettings;
use bingo_backend::config::game::GameRules;
use bingo_backend::infra::state::build_state;
use bingo_backend::middleware::{ChannelGuard, RequestTrace, StructuredLogger};
use bingo_backend::routes;
use bingo_backend::telemetry;
use tracing::{error, info};

fn exit_on_config_error<T>(result: Result<T, bingo_backend::AppError>) -> T {
    result.unwrap_or_else(|e| {
        error!(error = %e, "invalid configuration");
        eprintln!("❌ {e}");
        std::process::exit(1);
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only.
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let db_settings = exit_on_config_error(DbSettings::from_env());
    let rules = exit_on_config_error(GameRules::from_env());
    let channel = exit_on_config_error(ChannelConfig::from_env());

    let app_state = match build_state()
        .with_db(db_settings.clone())
        .with_rules(rules)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, path = %db_settings.path, "failed to open database");
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %host,
        port,
        db_path = %db_settings.path,
        consensus_ratio = rules.consensus_ratio,
        allowed_channel = ?channel.allowed_channel,
        "bingo backend starting"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(web::scope("/health").configure(routes::health::configure_routes))
            .service(
                web::scope("/api/games")
                    .wrap(ChannelGuard::new(channel))
                    .configure(routes::games::configure_routes),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
