use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CarscopeError, Result};
use crate::utils::validation::{
    validate_positive_number, validate_price_bounds, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File-based configuration, the successor to the config.json the original
/// deployment exported next to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub price: Option<PriceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub endpoint: String,
    pub per_page: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceConfig {
    pub floor: u32,
    pub ceiling: u32,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| CarscopeError::ConfigError {
                message: format!("failed to parse {}: {}", path.as_ref().display(), e),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.endpoint", &self.backend.endpoint)?;
        validate_positive_number("backend.per_page", self.backend.per_page.unwrap_or(20) as u64, 1)?;
        if let Some(price) = &self.price {
            validate_price_bounds("price.floor/price.ceiling", price.floor, price.ceiling)?;
        }
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.backend.endpoint
    }

    fn per_page(&self) -> u32 {
        self.backend.per_page.unwrap_or(20)
    }

    fn price_bounds(&self) -> (u32, u32) {
        match self.price {
            Some(price) => (price.floor, price.ceiling),
            None => (2000, 100_000),
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_seconds.unwrap_or(30))
    }
}
