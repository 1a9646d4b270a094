use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use wayfarer_match::config::Settings;
use wayfarer_match::core::Ranker;
use wayfarer_match::models::responses::RemoteStatus;
use wayfarer_match::routes::{self, handle_json_payload_error, AppState};
use wayfarer_match::services::{Catalog, RecommendationService, RemoteRecommender, ResultCache};

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings);

    info!("Starting Wayfarer matching service...");

    let catalog = Catalog::load(settings.catalog.path.as_deref())
        .map_err(|e| startup_error("Failed to load catalog", e))?;

    info!(
        "Catalog ready ({} universities, {} countries, {} destinations)",
        catalog.universities.len(),
        catalog.countries.len(),
        catalog.destinations.len()
    );

    let mut ranker = Ranker::new(settings.scoring.jitter, settings.scoring.seed);
    if let Some(limit) = settings.scoring.limit {
        ranker = ranker.with_limit(limit);
    }

    info!("Ranker initialized with {:?} jitter", settings.scoring.jitter);

    let mut service = RecommendationService::new(Arc::new(catalog), ranker);

    if settings.remote.enabled {
        let remote = RemoteRecommender::with_timeouts(
            settings.remote.base_url.clone(),
            settings.remote.timeout(),
            settings.remote.health_timeout(),
        )
        .map_err(|e| startup_error("Failed to create HTTP client", e))?;

        let base_url = remote.base_url().to_string();
        service = service.with_remote(remote);

        if service.remote_status().await == RemoteStatus::Available {
            info!("Remote recommender available at {}", base_url);
        } else {
            warn!(
                "Remote recommender at {} is not responding; student requests will use the local catalog",
                base_url
            );
        }

        if settings.cache.enabled {
            service = service.with_cache(ResultCache::new(settings.cache.capacity, settings.cache.ttl_secs));
            info!(
                "Result cache initialized ({} entries, TTL: {}s)",
                settings.cache.capacity, settings.cache.ttl_secs
            );
        }
    } else {
        info!("Remote recommender disabled; all dashboards rank locally");
    }

    let app_state = AppState { service };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
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
