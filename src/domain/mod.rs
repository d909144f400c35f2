//! Domain records shown by the console's list and detail views.

pub mod task;
pub mod transaction;
pub mod user;

/// A record listed by one of the console views.
///
/// List controllers treat records as opaque beyond the canonical identifier;
/// the wire layer normalizes whatever field the backend uses (`id`, `userId`)
/// into this one accessor.
pub trait Record {
    /// Stable unique identifier of the record.
    fn id(&self) -> &str;
}

/// Case-insensitive search and filter matching over an entity's fixed field set.
///
/// The live backend applies search and filter server-side; this trait gives the
/// in-memory source the same semantics.
pub trait Searchable {
    /// Returns true when any searchable field contains `term`.
    fn matches_search(&self, term: &str) -> bool;

    /// Returns true when the entity matches the enumerated filter value.
    fn matches_filter(&self, _filter: &str) -> bool {
        true
    }
}

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
