use std::sync::Arc;

use findmusic_api::{SearchRequest, SearchResponse};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::transport::{HttpTransport, Transport};

/// Talks to the search proxy. One `submit` is exactly one POST; nothing is retried or cached.
#[derive(Clone)]
pub struct QueryClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl QueryClient {
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        Ok(Self::with_transport(config, Arc::new(HttpTransport::new()?)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Post `theme` to `{proxy}/search` and decode the ranked lists.
    ///
    /// A blank theme fails with `SearchError::Validation` before any I/O.
    pub async fn submit(&self, theme: &str) -> Result<SearchResponse, SearchError> {
        let request = SearchRequest::new(theme).ok_or(SearchError::Validation)?;
        let body =
            serde_json::to_vec(&request).map_err(|e| SearchError::Transport(e.to_string()))?;
        let url = self.config.search_url();
        debug!(target: "findmusic_client", theme = %request.theme, %url, "posting search");

        let response = self.transport.post_json(&url, body).await?;
        if !response.is_success() {
            let message = response.text();
            warn!(target: "findmusic_client", code = response.code, %message, "search rejected by proxy");
            return Err(SearchError::RequestFailed(message));
        }

        let decoded: SearchResponse = serde_json::from_slice(&response.body)
            .map_err(|e| SearchError::Decode(e.to_string()))?;
        if let Some(diag) = &decoded.debug {
            debug!(target: "findmusic_client", %diag, "proxy diagnostics");
        }
        debug!(
            target: "findmusic_client",
            main = decoded.results_main.len(),
            secondary = decoded.results_secondary.len(),
            "search decoded"
        );
        Ok(decoded)
    }

    /// `GET {proxy}/health`; returns the proxy's `status` field.
    pub async fn health(&self) -> Result<String, SearchError> {
        let response = self.transport.get(&self.config.health_url()).await?;
        if !response.is_success() {
            return Err(SearchError::RequestFailed(response.text()));
        }
        let v: serde_json::Value = serde_json::from_slice(&response.body)
            .map_err(|e| SearchError::Decode(e.to_string()))?;
        v.get("status")
            .and_then(|s| s.as_str())
            .map(str::to_string)
            .ok_or_else(|| SearchError::Decode("health body has no status".to_string()))
    }
}
