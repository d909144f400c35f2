//! Tolerant deserialization of collaborator payloads.
//!
//! Backends disagree on envelope field names, and some omit the pagination
//! block entirely. The envelopes here accept the observed variants and
//! degrade to safe defaults instead of failing hard.

use serde::Deserialize;

use crate::api::ListQuery;
use crate::pagination::ListResult;

/// List payload envelope.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PageMeta>,
}

/// Pagination metadata block; every field optional so a partial block still
/// parses.
#[derive(Debug, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default, alias = "per_page", alias = "pageSize")]
    pub limit: Option<usize>,
    #[serde(default, alias = "totalItems")]
    pub total: Option<usize>,
    #[serde(default, alias = "total_pages", alias = "totalPages")]
    pub pages: Option<usize>,
}

impl<T> PageEnvelope<T> {
    /// Converts the wire payload into a [`ListResult`].
    ///
    /// A missing pagination block falls back to page 1, the requested page
    /// size, the item count as total and a single page. Missing individual
    /// fields are filled from the query, with `pages` re-derived from the
    /// total when the backend leaves it out.
    pub fn into_result(self, query: &ListQuery) -> ListResult<T> {
        let item_count = self.items.len();
        match self.pagination {
            Some(meta) => {
                let per_page = meta.limit.unwrap_or(query.per_page);
                let total = meta.total.unwrap_or(item_count);
                let pages = meta
                    .pages
                    .unwrap_or_else(|| total.div_ceil(per_page.max(1)));
                ListResult::from_parts(
                    self.items,
                    meta.page.unwrap_or(query.page),
                    per_page,
                    total,
                    pages,
                )
            }
            None => ListResult::from_parts(self.items, 1, query.per_page, item_count, 1),
        }
    }
}

/// Detail payload envelope; an absent `data` field signals not-found.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DetailEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}
