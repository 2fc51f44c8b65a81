use actix_files::Files;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::{error, info, warn};

use backend::config::Config;
use backend::events::InMemoryCatalog;
use backend::middleware::{cors_middleware, Logger, SecurityHeaders};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::load().context("Failed to load configuration")?;

    // A broken seed should still answer /api/events, with a 503 the client can show.
    let catalog = match InMemoryCatalog::load(&config.catalog.events_file).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{}", e);
            InMemoryCatalog::unavailable(e.to_string())
        }
    };
    let catalog = web::Data::new(catalog);

    let frontend_dist = config
        .catalog
        .frontend_dist
        .clone()
        .filter(|dist| {
            let exists = dist.is_dir();
            if !exists {
                warn!("FRONTEND_DIST {} is not a directory, not serving it", dist.display());
            }
            exists
        });

    info!(
        "Starting SportsSeat backend on {}:{}",
        config.server.host, config.server.port
    );

    let server_config = config.clone();
    HttpServer::new(move || {
        let app = App::new()
            .app_data(catalog.clone())
            .wrap(SecurityHeaders {
                hsts: server_config.is_production(),
            })
            .wrap(cors_middleware(&server_config))
            .wrap(Logger)
            .configure(backend::routes);

        match &frontend_dist {
            Some(dist) => app.service(Files::new("/", dist).index_file("index.html")),
            None => app,
        }
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))
    .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?
    .run()
    .await
    .context("Server terminated with an error")?;

    Ok(())
}
