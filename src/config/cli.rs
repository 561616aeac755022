use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_price_bounds, validate_url, Validate,
};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "carscope")]
#[command(about = "Browse used-car listings and score deals against the car-score backend")]
pub struct CliConfig {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub api_endpoint: String,

    /// Server-fixed page size.
    #[arg(long, default_value = "20")]
    pub per_page: u32,

    #[arg(long, default_value = "2000")]
    pub price_floor: u32,

    #[arg(long, default_value = "100000")]
    pub price_ceiling: u32,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    /// Read endpoint and limits from a TOML file instead of the flags above.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch a filtered page of listings.
    Browse {
        #[arg(long)]
        make: Vec<String>,
        #[arg(long)]
        model: Vec<String>,
        #[arg(long)]
        state: Vec<String>,
        #[arg(long)]
        min_price: Option<u32>,
        #[arg(long)]
        max_price: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Score a free-text car description.
    Predict {
        #[arg(long)]
        description: String,
    },
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn price_bounds(&self) -> (u32, u32) {
        (self.price_floor, self.price_ceiling)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("per_page", self.per_page as u64, 1)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_price_bounds("price_floor/price_ceiling", self.price_floor, self.price_ceiling)?;
        Ok(())
    }
}
