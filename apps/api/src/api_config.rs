use std::env;
use std::time::Duration;

use entitle_core::AppError;

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub simulated_latency: Duration,
    pub seed_demo_data: bool,
}

impl ApiConfig {
    /// Loads configuration, falling back to local-development defaults.
    pub fn load() -> Result<Self, AppError> {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let simulated_latency_ms = match env::var("SIMULATED_LATENCY_MS") {
            Ok(value) => value.parse::<u64>().map_err(|error| {
                AppError::Validation(format!("invalid SIMULATED_LATENCY_MS: {error}"))
            })?,
            Err(_) => 500,
        };

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            simulated_latency: Duration::from_millis(simulated_latency_ms),
            seed_demo_data,
        })
    }
}
