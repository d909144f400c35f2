//! Pagination primitives: the fetched-page envelope and the page-button window.

use serde::Serialize;

/// Page sizes the views may select.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Page size used before a view picks one.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Number of page buttons shown at once.
const WINDOW: usize = 5;

/// A fetched page of records plus its pagination metadata.
///
/// Replaced wholesale on every successful fetch, never patched in place.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListResult<T> {
    /// Records in collaborator order; not re-sorted client-side.
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    /// Total records matching the query across all pages.
    pub total: usize,
    pub pages: usize,
}

impl<T> ListResult<T> {
    /// Builds the result for one page out of `total` matching records.
    ///
    /// `pages` is `total.div_ceil(per_page)`, so zero matching records yield
    /// zero pages and an empty button window.
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            items,
            page: page.max(1),
            per_page,
            total,
            pages: total.div_ceil(per_page),
        }
    }

    /// Builds a result from explicit metadata, bypassing the `pages`
    /// derivation. Used by the wire layer when degrading a response with
    /// missing pagination metadata to safe defaults.
    pub fn from_parts(items: Vec<T>, page: usize, per_page: usize, total: usize, pages: usize) -> Self {
        Self {
            items,
            page: page.max(1),
            per_page: per_page.max(1),
            total,
            pages,
        }
    }

    /// Page-button layout for this result.
    pub fn controls(&self) -> Vec<PageControl> {
        page_window(self.page, self.pages)
    }
}

/// One entry of the pagination control strip.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageControl {
    Prev { disabled: bool },
    Page { number: usize, current: bool },
    Next { disabled: bool },
}

/// Sliding window of page buttons.
///
/// At most [`WINDOW`] page numbers centered on `page`, clamped to
/// `[1, total_pages]`; near a boundary the window shifts instead of
/// shrinking. Always bracketed by a prev entry (disabled on the first page)
/// and a next entry (disabled on the last). No page entries at all when
/// `total_pages` is zero.
pub fn page_window(page: usize, total_pages: usize) -> Vec<PageControl> {
    let mut controls = vec![PageControl::Prev { disabled: page <= 1 }];

    if total_pages > 0 {
        let page = page.clamp(1, total_pages);
        let (start, end) = if total_pages <= WINDOW {
            (1, total_pages)
        } else {
            let start = page.saturating_sub(2).max(1);
            let end = (start + WINDOW - 1).min(total_pages);
            // re-clamp so the window stays WINDOW wide at the right boundary
            let start = end.saturating_sub(WINDOW - 1).max(1);
            (start, end)
        };
        controls.extend((start..=end).map(|number| PageControl::Page {
            number,
            current: number == page,
        }));
    }

    controls.push(PageControl::Next {
        disabled: page >= total_pages,
    });
    controls
}
