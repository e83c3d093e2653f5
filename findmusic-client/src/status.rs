use findmusic_api::SearchResponse;

use crate::error::SearchError;

pub const SEARCHING: &str = "Searching…";

pub fn ok_line(response: &SearchResponse) -> String {
    format!(
        "OK • requête: \"{}\" ({})",
        response.query,
        response.language_query.to_uppercase()
    )
}

pub fn error_line(err: &SearchError) -> String {
    format!("Error: {err}")
}
