use crate::domain::model::{Catalog, ListingPage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Transport-facing port for the listing backend. The coordinator never
/// issues HTTP itself; it talks to this trait.
#[async_trait]
pub trait ListingBackend: Send + Sync {
    /// `GET /metadata`, fetched once per session.
    async fn fetch_catalog(&self) -> Result<Catalog>;

    /// `GET /cars` with the given ordered query pairs.
    async fn fetch_listings(&self, query: &[(String, String)]) -> Result<ListingPage>;

    /// `POST /predict` with a free-text car description, returning the score.
    async fn predict(&self, description: &str) -> Result<f64>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn per_page(&self) -> u32;
    /// Absolute (floor, ceiling) limits for the price filter.
    fn price_bounds(&self) -> (u32, u32);
    fn timeout(&self) -> Duration;
}
