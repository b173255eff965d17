//! Single-slot cache of a category's member names.
//!
//! The category endpoint returns the whole member list at once, so the list
//! is fetched once and paginated locally. Only one category is held at a
//! time; asking for a different category evicts the current list.

use crate::error::Result;
use crate::gateway::CatalogSource;

#[derive(Debug, Clone, Default)]
pub struct ListCache {
    names: Vec<String>,
    category: Option<String>,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the member names of `category`, fetching them only when the
    /// cached list belongs to another category or is empty.
    ///
    /// A failed fetch leaves the previous contents in place.
    pub async fn get_names<S: CatalogSource>(
        &mut self,
        source: &S,
        category: &str,
    ) -> Result<&[String]> {
        if self.is_valid_for(category) {
            tracing::debug!("list cache hit for '{}'", category);
            return Ok(&self.names);
        }

        tracing::debug!("list cache miss for '{}'", category);
        let names = source.fetch_category_names(category).await?;
        self.names = names;
        self.category = Some(category.to_string());
        Ok(&self.names)
    }

    /// Whether a call for `category` would be served without a fetch
    pub fn is_valid_for(&self, category: &str) -> bool {
        !self.names.is_empty() && self.category.as_deref() == Some(category)
    }

    /// Category the cached names belong to
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
