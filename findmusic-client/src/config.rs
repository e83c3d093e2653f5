use url::Url;

use crate::error::{ConfigError, ConfigResult};

pub const PROXY_URL_ENV: &str = "FINDMUSIC_PROXY_URL";

/// Where the search proxy lives. Injected into `QueryClient` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    proxy_base_url: Url,
}

impl ClientConfig {
    /// Accepts an absolute http(s) URL; a trailing `/` is dropped.
    pub fn new(proxy_base_url: &str) -> ConfigResult<Self> {
        let raw = proxy_base_url.trim();
        let invalid = |reason: String| ConfigError::InvalidProxyUrl {
            url: raw.to_string(),
            reason,
        };
        let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        let path = url.path().trim_end_matches('/').to_string();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self {
            proxy_base_url: url,
        })
    }

    /// - FINDMUSIC_PROXY_URL (required)
    pub fn from_env() -> ConfigResult<Self> {
        let raw = std::env::var(PROXY_URL_ENV).map_err(|_| ConfigError::MissingProxyUrl)?;
        if raw.trim().is_empty() {
            return Err(ConfigError::MissingProxyUrl);
        }
        Self::new(&raw)
    }

    pub fn proxy_base_url(&self) -> &Url {
        &self.proxy_base_url
    }

    /// `{proxy_base_url}/{name}`, keeping any path prefix of the base.
    pub fn endpoint(&self, name: &str) -> Url {
        let mut url = self.proxy_base_url.clone();
        let path = format!(
            "{}/{}",
            self.proxy_base_url.path().trim_end_matches('/'),
            name.trim_start_matches('/')
        );
        url.set_path(&path);
        url
    }

    pub fn search_url(&self) -> Url {
        self.endpoint("search")
    }

    pub fn health_url(&self) -> Url {
        self.endpoint("health")
    }
}
