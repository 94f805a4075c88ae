//! Quadra entry-point: wires the catalogue REST endpoints and OpenAPI docs.

use actix_web::web;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::example_data::seed_example_catalog;
use backend::inbound::http::health::HealthState;
use backend::server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    let http_state = web::Data::new(build_http_state());

    if config.seed_example_data {
        if let Err(e) = seed_example_catalog(&http_state).await {
            error!(error = %e, "example catalogue seeding failed");
            return Err(std::io::Error::other(format!(
                "example catalogue seeding failed: {e}"
            )));
        }
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, http_state, &config)?.await
}
