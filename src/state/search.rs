//! Record filtering.
//!
//! Case-insensitive substring match over every field's string form. The
//! predicate is exposed on its own so callers can re-derive a view from the
//! store whenever they choose.

use crate::model::Record;

// ===== FilterPolicy =====

/// What happens to the filtered view after the store is mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Mutations overwrite the filtered view with the whole store. The last
    /// search is forgotten until the user searches again.
    #[default]
    Stale,
    /// Mutations re-run the last search against the new store.
    Reapply,
}

impl FilterPolicy {
    /// Parse a policy name as used in config files and env vars.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stale" => Some(FilterPolicy::Stale),
            "reapply" => Some(FilterPolicy::Reapply),
            _ => None,
        }
    }

    /// Name accepted by [`FilterPolicy::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            FilterPolicy::Stale => "stale",
            FilterPolicy::Reapply => "reapply",
        }
    }
}

// ===== Matching =====

/// Whether any field of `record` contains `query`, ignoring case.
///
/// An empty query matches every record.
pub fn record_matches(record: &Record, query: &str) -> bool {
    let query_lower = query.to_lowercase();
    matches_lowered(record, &query_lower)
}

fn matches_lowered(record: &Record, query_lower: &str) -> bool {
    record
        .field_strings()
        .any(|value| value.to_lowercase().contains(query_lower))
}

/// Records of `store` matching `query`, in store order.
pub fn filter_records(store: &[Record], query: &str) -> Vec<Record> {
    let query_lower = query.to_lowercase();
    store
        .iter()
        .filter(|record| matches_lowered(record, &query_lower))
        .cloned()
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
