//! Pagination arithmetic for `postPerIndex` and `postPerPage`.

use crate::config::SiteConfig;
use std::ops::Range;

/// Page layout for a list of `total` posts.
///
/// Pages are 1-based. There is always at least one page, so an empty blog
/// still renders `/posts/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    per_page: usize,
}

impl Pagination {
    /// `per_page == 0` puts every post on one page.
    pub const fn new(total: usize, per_page: usize) -> Self {
        Self { total, per_page }
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    /// Posts per page after the zero fallback.
    pub const fn per_page(&self) -> usize {
        if self.per_page == 0 {
            if self.total == 0 { 1 } else { self.total }
        } else {
            self.per_page
        }
    }

    /// `max(1, ceil(total / per_page))`.
    pub const fn total_pages(&self) -> usize {
        let pages = self.total.div_ceil(self.per_page());
        if pages == 0 { 1 } else { pages }
    }

    /// Index range into the post list for page `page`, `None` past the end.
    pub fn page_range(&self, page: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.total_pages() {
            return None;
        }
        let start = (page - 1) * self.per_page();
        let end = (start + self.per_page()).min(self.total);
        Some(start..end)
    }

    /// Every page's range, in order.
    pub fn pages(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (1..=self.total_pages()).filter_map(|page| self.page_range(page))
    }
}

impl SiteConfig {
    /// Pagination of `total` posts with `postPerPage`.
    pub const fn pagination(&self, total: usize) -> Pagination {
        Pagination::new(total, self.post_per_page as usize)
    }

    /// Posts shown on the index page: the first `postPerIndex`.
    pub fn index_range(&self, total: usize) -> Range<usize> {
        0..total.min(self.post_per_index as usize)
    }
}
