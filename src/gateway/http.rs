//! HTTP implementation of [`CatalogSource`] over the public REST API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::entry::{Category, Entry};
use crate::error::{CatalogError, Result};

use super::wire::{CategoryList, CategoryMembers, EntryPage, EntryRecord};
use super::{CatalogSource, NamePage};

const CATEGORY_PATH: &str = "type";
const ENTRY_PATH: &str = "pokemon";

/// Gateway to the upstream catalog API
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Create a gateway rooted at `base_url`.
    ///
    /// No request timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::Config(format!("invalid API URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Config(format!(
                "API URL '{base_url}' cannot be used as a base"
            )));
        }

        let mut builder =
            Client::builder().user_agent(concat!("dexbrowse/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// Non-success statuses become [`CatalogError::Http`], transport failures
    /// [`CatalogError::Network`] and unparsable bodies [`CatalogError::Decode`].
    pub async fn fetch_json(&self, url: &Url) -> Result<serde_json::Value> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(format!("{url}: {e}")))
    }

    async fn fetch_typed<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let value = self.fetch_json(url).await?;
        serde_json::from_value(value).map_err(|e| CatalogError::Decode(format!("{url}: {e}")))
    }
}

impl CatalogSource for HttpGateway {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let url = self.endpoint(&[CATEGORY_PATH]);
        let list: CategoryList = self.fetch_typed(&url).await?;
        Ok(list
            .results
            .into_iter()
            .map(|r| Category::new(r.name))
            .collect())
    }

    async fn fetch_category_names(&self, category: &str) -> Result<Vec<String>> {
        if is_dot_segment(category) {
            return Err(CatalogError::NotFound(category.to_string()));
        }
        let url = self.endpoint(&[CATEGORY_PATH, category]);
        let members: CategoryMembers = self.fetch_typed(&url).await?;
        Ok(members
            .members
            .into_iter()
            .map(|m| m.member_ref.name)
            .collect())
    }

    async fn fetch_name_page(&self, limit: usize, offset: usize) -> Result<NamePage> {
        let mut url = self.endpoint(&[ENTRY_PATH]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        let page: EntryPage = self.fetch_typed(&url).await?;
        Ok(NamePage {
            count: page.count,
            names: page.results.into_iter().map(|r| r.name).collect(),
        })
    }

    async fn lookup_entry(&self, name_or_id: &str) -> Result<Entry> {
        let key = name_or_id.trim().to_lowercase();
        if is_dot_segment(&key) {
            return Err(CatalogError::NotFound(key));
        }
        let url = self.endpoint(&[ENTRY_PATH, &key]);
        match self.fetch_typed::<EntryRecord>(&url).await {
            Ok(record) => Ok(Entry::from(record)),
            Err(CatalogError::Http { status: 404, .. }) => Err(CatalogError::NotFound(key)),
            Err(e) => Err(e),
        }
    }
}

/// `.` and `..` are dropped or resolved by URL path handling, so they can
/// never name a single resource.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
