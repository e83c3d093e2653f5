//! Pure mapping from result records to something a view can display.
//!
//! `render` never fails: every missing field has a default. Escaping happens
//! only when a fragment is turned into markup (`DisplayFragment::to_html`).

use findmusic_api::ResultItem;

use crate::util::{escape_html, percent};

pub const NO_RESULTS: &str = "No results.";
pub const NO_EXCERPT: &str = "(no excerpt found)";

/// One collapsible entry, already defaulted and formatted but not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub artist: String,
    pub year: Option<String>,
    /// Relevance as a whole percentage.
    pub score: i64,
    /// Upper-cased original language code.
    pub language: String,
    pub excerpt: String,
    pub density: i64,
    pub centrality: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayFragment {
    NoResults,
    Entries(Vec<Entry>),
}

pub fn render(items: &[ResultItem]) -> DisplayFragment {
    if items.is_empty() {
        return DisplayFragment::NoResults;
    }
    DisplayFragment::Entries(items.iter().map(Entry::from_item).collect())
}

impl Entry {
    fn from_item(item: &ResultItem) -> Self {
        let excerpt = match item.snippet.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => NO_EXCERPT.to_string(),
        };
        Self {
            title: item.title.clone().unwrap_or_default(),
            artist: item.artist.clone().unwrap_or_default(),
            year: format_year(item.year),
            score: percent(item.relevance),
            language: item
                .language_original
                .as_deref()
                .unwrap_or("")
                .to_uppercase(),
            excerpt,
            density: percent(item.density),
            centrality: percent(item.centrality),
        }
    }

    pub fn to_html(&self) -> String {
        let year = self
            .year
            .as_deref()
            .map(|y| format!(" ({})", escape_html(y)))
            .unwrap_or_default();
        format!(
            "<details>\
                <summary><strong>{title}</strong> — {artist}{year} • score: {score}% • {language}</summary>\
                <div class=\"snip\">{excerpt}</div>\
                <div class=\"meta\">density: {density}% • centrality: {centrality}%</div>\
            </details>",
            title = escape_html(&self.title),
            artist = escape_html(&self.artist),
            score = self.score,
            language = escape_html(&self.language),
            excerpt = escape_html(&self.excerpt),
            density = self.density,
            centrality = self.centrality,
        )
    }
}

impl DisplayFragment {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, DisplayFragment::NoResults)
    }

    pub fn entries(&self) -> &[Entry] {
        match self {
            DisplayFragment::NoResults => &[],
            DisplayFragment::Entries(entries) => entries.as_slice(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            DisplayFragment::NoResults => format!("<div class=\"status\">{NO_RESULTS}</div>"),
            DisplayFragment::Entries(entries) => entries.iter().map(Entry::to_html).collect(),
        }
    }
}

// Zero and absent years are both hidden; integral years print without ".0".
fn format_year(year: Option<f64>) -> Option<String> {
    year.filter(|y| y.is_finite() && *y != 0.0)
        .map(|y| format!("{y}"))
}
