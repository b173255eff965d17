//! Remote data gateway.
//!
//! [`CatalogSource`] is the seam between the resolver and the network. The
//! production implementation is [`HttpGateway`]; tests substitute an
//! in-memory catalog.

pub mod http;
pub mod wire;

use std::future::Future;

use crate::entry::{Category, Entry};
use crate::error::Result;

pub use http::HttpGateway;

/// One server-side page of entry names together with the API's total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePage {
    pub count: u64,
    pub names: Vec<String>,
}

/// Read-only access to the upstream catalog
pub trait CatalogSource: Send + Sync {
    /// Fetch every category the catalog knows about
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send;

    /// Fetch the ordered member names of one category
    fn fetch_category_names(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Fetch one page of entry names using the API's offset/limit paging
    fn fetch_name_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<NamePage>> + Send;

    /// Look up a single entry by name or numeric id, surfacing failures
    fn lookup_entry(&self, name_or_id: &str) -> impl Future<Output = Result<Entry>> + Send;

    /// Look up a single entry, mapping every failure to `None`.
    ///
    /// Callers assembling a page filter out the `None`s without caring why
    /// an entry is missing.
    fn fetch_entry(&self, name_or_id: &str) -> impl Future<Output = Option<Entry>> + Send {
        async move {
            match self.lookup_entry(name_or_id).await {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("entry '{}' unavailable: {}", name_or_id, e);
                    None
                }
            }
        }
    }
}
