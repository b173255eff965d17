//! Sort functions for a page of entries.
//!
//! Sorting only reorders the entries already fetched for the current page;
//! it never moves entries across page boundaries.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicase::UniCase;

use crate::entry::Entry;

/// Order of the entries on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "id-asc", alias = "id")]
    IdAscending,
    #[serde(rename = "name-asc", alias = "name")]
    NameAscending,
}

impl SortKey {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &["id", "name"];
}

enum_display_fromstr!(
    SortKey,
    crate::error::CatalogError::invalid_sort_key,
    {
        IdAscending => "id" | "id-asc",
        NameAscending => "name" | "name-asc",
    }
);

/// Case-insensitive name order, falling back to the raw bytes for ties
fn compare_names(a: &str, b: &str) -> Ordering {
    UniCase::new(a).cmp(&UniCase::new(b)).then_with(|| a.cmp(b))
}

/// Sort entries by id (ascending)
pub fn sort_by_id(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.id);
}

/// Sort entries by name (ascending, case-insensitive)
pub fn sort_by_name(entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Sort entries by the specified key
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::IdAscending => sort_by_id(entries),
        SortKey::NameAscending => sort_by_name(entries),
    }
}
