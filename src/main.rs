mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::{Config, CONFIG, DATA_SOURCE_MOCK};
use crate::constants::ERR_UNSUPPORTED_DATA_SOURCE;
use crate::repositories::{CustomerRepository, FixtureCustomerRepository};
use crate::services::CustomerService;

/// Build the dataset provider selected by `DATA_SOURCE`.
fn build_repository(config: &Config) -> io::Result<Arc<dyn CustomerRepository>> {
    match config.data_source.as_str() {
        DATA_SOURCE_MOCK => Ok(Arc::new(FixtureCustomerRepository::generate(
            config.fixture_size,
        ))),
        other => {
            error!("{}: {}", ERR_UNSUPPORTED_DATA_SOURCE, other);
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: {}", ERR_UNSUPPORTED_DATA_SOURCE, other),
            ))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load the customer dataset once; it is read-only from here on
    info!("Loading customer dataset from {} source...", CONFIG.data_source);
    let repository = build_repository(&CONFIG)?;
    let customer_service = web::Data::new(CustomerService::new(repository));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(customer_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(data_source: &str) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            data_source: data_source.to_string(),
            fixture_size: 5,
        }
    }

    #[actix_web::test]
    async fn test_build_mock_repository() {
        let repository = build_repository(&config("MOCK")).unwrap();
        assert_eq!(repository.count().await.unwrap(), 5);
    }

    #[test]
    fn test_build_unknown_repository_fails() {
        let err = build_repository(&config("DYNAMODB")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
