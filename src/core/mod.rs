pub mod filters;
pub mod pagination;
pub mod predict;
pub mod query;
pub mod score;
pub mod session;

pub use crate::domain::model::{Catalog, Listing, ListingPage};
pub use crate::domain::ports::{ConfigProvider, ListingBackend};
pub use crate::utils::error::Result;
