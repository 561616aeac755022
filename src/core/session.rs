use crate::core::filters::{Dimension, FilterState, PriceBounds};
use crate::core::pagination::Pagination;
use crate::core::query;
use crate::domain::model::{Catalog, Listing, ListingPage};
use crate::domain::ports::ListingBackend;
use crate::utils::error::Result;
use std::sync::Arc;

/// The browsing coordinator: one authoritative record of filter state and
/// pagination, driving the backend through an explicit pipeline.
///
/// Any selection or price mutation resets the page to 1 and triggers a
/// refresh. Every fetch carries a monotonically increasing token; a response
/// is applied only while its token is still the latest issued, so a slow
/// earlier response can never overwrite a newer filter's results.
pub struct BrowseSession<B: ListingBackend> {
    backend: B,
    filters: FilterState,
    pagination: Pagination,
    listings: Vec<Listing>,
    last_error: Option<String>,
    issued: u64,
}

impl<B: ListingBackend> BrowseSession<B> {
    pub fn new(backend: B, per_page: u32, bounds: PriceBounds) -> Self {
        Self {
            backend,
            filters: FilterState::new(bounds),
            pagination: Pagination::new(per_page),
            listings: Vec::new(),
            last_error: None,
            issued: 0,
        }
    }

    /// Fetches the reference catalog once at session start.
    pub async fn load_catalog(&mut self) -> Result<()> {
        let catalog = self.backend.fetch_catalog().await?;
        tracing::debug!(
            makes = catalog.makes.len(),
            states = catalog.states.len(),
            "catalog loaded"
        );
        self.filters.set_catalog(Arc::new(catalog));
        Ok(())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.filters.catalog()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub async fn toggle_make(&mut self, make: &str) -> Result<()> {
        self.toggle(Dimension::Make, make).await
    }

    pub async fn toggle_model(&mut self, model: &str) -> Result<()> {
        self.toggle(Dimension::Model, model).await
    }

    pub async fn toggle_state(&mut self, state: &str) -> Result<()> {
        self.toggle(Dimension::State, state).await
    }

    pub async fn toggle(&mut self, dimension: Dimension, value: &str) -> Result<()> {
        if self.filters.toggle(dimension, value) {
            tracing::debug!(?dimension, value, "selection changed");
            self.on_filter_change().await?;
        }
        Ok(())
    }

    /// Applies a new price range. An invalid range is rejected silently and
    /// triggers no fetch; the return value reports whether it was accepted.
    pub async fn set_price_range(&mut self, min: u32, max: u32) -> Result<bool> {
        if self.filters.set_price_range(min, max) {
            tracing::debug!(min, max, "price range changed");
            self.on_filter_change().await?;
            Ok(true)
        } else {
            tracing::debug!(min, max, "price range rejected or unchanged");
            Ok(false)
        }
    }

    pub async fn go_to_page(&mut self, n: u32) -> Result<()> {
        if self.pagination.go_to_page(n) {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn next_page(&mut self) -> Result<()> {
        if self.pagination.next() {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn prev_page(&mut self) -> Result<()> {
        if self.pagination.prev() {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn first_page(&mut self) -> Result<()> {
        if self.pagination.first() {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn last_page(&mut self) -> Result<()> {
        if self.pagination.last() {
            self.refresh().await?;
        }
        Ok(())
    }

    async fn on_filter_change(&mut self) -> Result<()> {
        // Any filter change invalidates the current result window.
        self.pagination.reset();
        self.refresh().await
    }

    /// Derives the query from the current state and fetches a listing page.
    /// On failure the display degrades to empty and the message is kept for
    /// the caller to surface.
    pub async fn refresh(&mut self) -> Result<()> {
        let token = self.issue_token();
        let pairs = query::build(&self.filters, &self.pagination);
        tracing::debug!(token, query = %query::encode(&pairs), "fetching listings");

        match self.backend.fetch_listings(&pairs).await {
            Ok(page) => {
                self.apply_listings(token, page);
                Ok(())
            }
            Err(e) => {
                if token == self.issued {
                    tracing::warn!(token, error = %e, "listing fetch failed");
                    self.listings.clear();
                    self.last_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    fn issue_token(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Applies a listing response only when `token` is still the latest
    /// issued request; stale responses are discarded, not applied.
    fn apply_listings(&mut self, token: u64, page: ListingPage) -> bool {
        if token != self.issued {
            tracing::debug!(token, latest = self.issued, "discarding stale listing response");
            return false;
        }
        self.pagination.set_total(page.total);
        self.listings = page.cars;
        self.last_error = None;
        tracing::debug!(
            token,
            count = self.listings.len(),
            total = page.total,
            page = self.pagination.page(),
            "listings applied"
        );
        true
    }
}
