/// Bounds-checked page navigation over a backend-supplied total.
///
/// Invariant: `1 <= page <= max(1, total_pages())` at all times. `per_page`
/// is server-fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
    total: u64,
}

impl Pagination {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            total: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// `ceil(total / per_page)`; 0 when there are no results.
    pub fn total_pages(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.total.div_ceil(self.per_page as u64) as u32
        }
    }

    /// Moves to page `n` if it lies within `[1, total_pages]`; otherwise a
    /// no-op. Returns whether the page changed.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n >= 1 && n <= self.total_pages() && n != self.page {
            self.page = n;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    pub fn prev(&mut self) -> bool {
        if self.page == 1 {
            return false;
        }
        self.go_to_page(self.page - 1)
    }

    pub fn first(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Unconditional return to page 1; used when a filter change invalidates
    /// the current result window.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Installs a new total from the backend and clamps the current page down
    /// when it now exceeds the page count.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        let cap = self.total_pages().max(1);
        if self.page > cap {
            self.page = cap;
        }
    }
}
