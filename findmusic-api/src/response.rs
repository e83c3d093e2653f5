use serde::Deserialize;

use crate::lenient;

/// One ranked song as returned by the proxy. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ResultItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub year: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub relevance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub language_original: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub snippet: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub density: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub centrality: Option<f64>,
}

/// Body of a successful `POST /search`.
///
/// `results_main` and `results_secondary` keep the proxy's ranking order.
/// `debug` carries the backend's diagnostics untouched; it is logged, never rendered.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub query: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub language_query: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub results_main: Vec<ResultItem>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub results_secondary: Vec<ResultItem>,
    #[serde(default)]
    pub debug: Option<serde_json::Value>,
}
