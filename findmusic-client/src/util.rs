/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `round(value * 100)` with half-up rounding; missing or non-finite values give 0.
pub fn percent(value: Option<f64>) -> i64 {
    match value {
        Some(v) if v.is_finite() => (v * 100.0 + 0.5).floor() as i64,
        _ => 0,
    }
}
