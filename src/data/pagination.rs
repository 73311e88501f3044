//! Pagination display state.

use crate::api::Pagination;

/// What the pagination footer shows for a page of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStatus {
    /// First item on the page, 1-based (0 when there are no items).
    pub first: u64,
    /// Last item on the page, clamped to the total.
    pub last: u64,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageStatus {
    pub fn from_pagination(p: &Pagination) -> Self {
        let per_page = u64::from(p.per_page);
        let page = u64::from(p.page.max(1));
        let (first, last) = if p.total == 0 {
            (0, 0)
        } else {
            let first = ((page - 1) * per_page + 1).min(p.total);
            let last = (page * per_page).min(p.total);
            (first, last)
        };

        Self {
            first,
            last,
            total: p.total,
            page: p.page,
            pages: p.pages,
            prev_enabled: p.page > 1,
            next_enabled: p.page < p.pages,
        }
    }

    /// Item range label, e.g. `21-40 of 45`.
    pub fn range_label(&self) -> String {
        format!("{}-{} of {}", self.first, self.last, self.total)
    }

    /// Page label, e.g. `Page 2 of 3`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.pages)
    }
}
