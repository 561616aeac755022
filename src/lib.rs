pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::http::HttpBackend;
pub use crate::config::AppConfig;
pub use crate::core::score::{classify, ScoreRating};
pub use crate::core::session::BrowseSession;
pub use crate::utils::error::{CarscopeError, Result};
