use serde::Serialize;

/// Upper bound sent with every search; the proxy caps it again on its side.
pub const MAX_RESULTS: u32 = 20;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub theme: String,
    pub max_results: u32,
}

impl SearchRequest {
    /// Build a request from raw user input.
    /// Returns `None` when the theme is empty after trimming.
    pub fn new(theme: &str) -> Option<Self> {
        let theme = theme.trim();
        if theme.is_empty() {
            return None;
        }
        Some(Self {
            theme: theme.to_string(),
            max_results: MAX_RESULTS,
        })
    }
}
