use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub holiday_provider_url: String,
    pub holiday_country: String,
    pub holiday_fetch_timeout: Duration,
    pub holiday_warmup: bool,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://calendario.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let holiday_provider_url = env::var("HOLIDAY_PROVIDER_URL")
            .unwrap_or_else(|_| "https://date.nager.at/api/v3".to_string());

        let holiday_country = env::var("HOLIDAY_COUNTRY")
            .unwrap_or_else(|_| "ES".to_string())
            .trim()
            .to_uppercase();
        if holiday_country.is_empty() {
            return Err(ConfigError::InvalidCountry);
        }

        let timeout_secs: u64 = env::var("HOLIDAY_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let holiday_warmup = env::var("HOLIDAY_WARMUP")
            .map(|value| !matches!(value.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "calendario".to_string());

        let metrics_port = env::var("METRICS_PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .unwrap_or(9000);

        Ok(Config {
            database_url,
            server_host,
            server_port,
            holiday_provider_url,
            holiday_country,
            holiday_fetch_timeout: Duration::from_secs(timeout_secs),
            holiday_warmup,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("HOLIDAY_FETCH_TIMEOUT_SECS must be a positive number of seconds")]
    InvalidTimeout,

    #[error("HOLIDAY_COUNTRY cannot be empty")]
    InvalidCountry,
}
