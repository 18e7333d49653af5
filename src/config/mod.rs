use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

/// Dataset backing the customer listing. Only the in-memory fixture exists for now.
pub const DATA_SOURCE_MOCK: &str = "MOCK";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub data_source: String,
    pub fixture_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            data_source: env::var("DATA_SOURCE")
                .unwrap_or_else(|_| DATA_SOURCE_MOCK.to_string())
                .to_uppercase(),
            fixture_size: env::var("FIXTURE_SIZE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .expect("FIXTURE_SIZE must be a valid number"),
        }
    }
}
