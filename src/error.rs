use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure reaching the API.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("'{0}' not found")]
    NotFound(String),

    /// The API answered, but the body was not the JSON we expected.
    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("invalid sort key '{0}', expected 'id' or 'name'")]
    InvalidSortKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    pub fn invalid_sort_key(s: String) -> Self {
        CatalogError::InvalidSortKey(s)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return CatalogError::Http {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }
        if err.is_decode() {
            return CatalogError::Decode(err.to_string());
        }
        CatalogError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
