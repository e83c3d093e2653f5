use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::response::Html;
use findmusic_client::util::escape_html;
use findmusic_client::{HtmlPage, SearchSession};
use serde::Deserialize;

use super::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    theme: Option<String>,
}

pub(super) async fn serve_index() -> Html<String> {
    Html(render_document("", &HtmlPage::default()))
}

/// Server-side search: run one submission against a fresh page and send the result.
pub(super) async fn serve_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let theme = params.theme.unwrap_or_default();
    let view = Arc::new(Mutex::new(HtmlPage::default()));
    let session = SearchSession::new(state.client.clone(), view.clone());
    let outcome = session.submit(&theme).await;
    tracing::debug!(target: "findmusicd", ?outcome, "search page rendered");

    let page = view
        .lock()
        .map(|p| p.clone())
        .unwrap_or_else(|poisoned| poisoned.into_inner().clone());
    Html(render_document(&theme, &page))
}

/// Whole page around the three regions. `page` is already markup; `theme` is raw input.
pub fn render_document(theme: &str, page: &HtmlPage) -> String {
    let theme = escape_html(theme);
    let HtmlPage {
        status,
        main,
        secondary,
    } = page;
    format!(
        "<!doctype html>
<html lang=\"fr\">
<head>
  <meta charset=\"utf-8\" />
  <title>FindMusic</title>
  <style>
    body {{ font-family: sans-serif; max-width: 900px; margin: 2rem auto; }}
    details {{ margin: .5rem 0; }}
    .snip {{ white-space: pre-wrap; margin: .5rem 0; }}
    .meta, .status {{ color: #666; font-size: .9em; }}
  </style>
</head>
<body>
  <h1>FindMusic</h1>
  <form id=\"search\" action=\"/search\" method=\"get\">
    <input id=\"theme\" name=\"theme\" type=\"text\" value=\"{theme}\" placeholder=\"Thème…\" autofocus autocomplete=\"off\" />
    <button id=\"go\" type=\"submit\">Rechercher</button>
  </form>
  <div id=\"status\" class=\"status\">{status}</div>
  <h2>Résultats principaux</h2>
  <div id=\"main\">{main}</div>
  <h2>Résultats secondaires</h2>
  <div id=\"secondary\">{secondary}</div>
</body>
</html>
"
    )
}
