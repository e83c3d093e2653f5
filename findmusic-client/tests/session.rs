mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{client_with, ipanema_response, ok_json, status, FakeTransport};
use findmusic_client::render::NO_RESULTS;
use findmusic_client::{HtmlPage, SearchError, SearchSession, SubmitOutcome};
use serde_json::json;

fn session(fake: Arc<FakeTransport>) -> SearchSession<HtmlPage> {
    SearchSession::new(client_with(fake), Arc::new(Mutex::new(HtmlPage::default())))
}

fn page(s: &SearchSession<HtmlPage>) -> HtmlPage {
    s.view().lock().unwrap().clone()
}

#[tokio::test]
async fn blank_theme_leaves_view_untouched() {
    let fake = Arc::new(FakeTransport::default());
    let s = session(fake.clone());
    s.view().lock().unwrap().status = "previous".into();

    assert_eq!(s.submit("  ").await, SubmitOutcome::Ignored);
    assert_eq!(fake.call_count(), 0);
    assert_eq!(page(&s).status, "previous");
}

#[tokio::test]
async fn successful_search_fills_all_regions() {
    let fake = Arc::new(FakeTransport::default());
    fake.push(ok_json(ipanema_response()));
    let s = session(fake);

    assert_eq!(s.submit("jazz brésilien").await, SubmitOutcome::Rendered);
    let p = page(&s);
    assert_eq!(p.status, "OK • requête: &quot;jazz brésilien&quot; (FR)");
    assert!(p.main.contains("<strong>Ipanema</strong> — Tom Jobim"));
    assert!(p.main.contains("score: 91% • PT"));
    assert!(p.main.contains("Olha que coisa mais linda"));
    assert_eq!(p.main.matches("<details>").count(), 1);
    assert_eq!(p.secondary, format!("<div class=\"status\">{NO_RESULTS}</div>"));
}

#[tokio::test]
async fn empty_main_shows_placeholder_even_with_secondary() {
    let fake = Arc::new(FakeTransport::default());
    fake.push(ok_json(json!({
        "query": "rain",
        "language_query": "en",
        "results_main": [],
        "results_secondary": [{ "title": "Purple Rain" }]
    })));
    let s = session(fake);

    s.submit("rain").await;
    let p = page(&s);
    assert!(p.main.contains(NO_RESULTS));
    assert!(p.secondary.contains("Purple Rain"));
}

#[tokio::test]
async fn server_error_reports_and_clears() {
    let fake = Arc::new(FakeTransport::default());
    fake.push(ok_json(ipanema_response()));
    fake.push(status(500, "internal error"));
    let s = session(fake);

    s.submit("jazz brésilien").await;
    assert!(!page(&s).main.is_empty());

    let outcome = s.submit("jazz brésilien").await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed(SearchError::RequestFailed("internal error".into()))
    );
    let p = page(&s);
    assert_eq!(p.status, "Error: internal error");
    assert!(p.main.is_empty());
    assert!(p.secondary.is_empty());
}

#[tokio::test]
async fn empty_error_body_leaves_bare_prefix() {
    let fake = Arc::new(FakeTransport::default());
    fake.push(status(500, ""));
    let s = session(fake);

    assert_eq!(
        s.submit("rain").await,
        SubmitOutcome::Failed(SearchError::RequestFailed(String::new()))
    );
    assert_eq!(page(&s).status, "Error: ");
}

#[tokio::test]
async fn falsy_fields_and_stray_elements_render_with_defaults() {
    let fake = Arc::new(FakeTransport::default());
    fake.push(ok_json(json!({
        "query": "rain",
        "results_main": [
            { "title": 0, "snippet": false, "language_original": false },
            7
        ]
    })));
    let s = session(fake);

    assert_eq!(s.submit("rain").await, SubmitOutcome::Rendered);
    let main = page(&s).main;
    assert_eq!(main.matches("<details>").count(), 2);
    assert_eq!(main.matches("<strong></strong>").count(), 2);
    assert_eq!(main.matches("(no excerpt found)").count(), 2);
    assert!(!main.contains("FALSE"));
    assert!(!main.contains(">false<"));
}

#[tokio::test]
async fn transport_and_decode_errors_use_the_same_status_form() {
    let fake = Arc::new(FakeTransport::default());
    fake.push(Err(SearchError::Transport("connection refused".into())));
    fake.push(status(200, "not json"));
    let s = session(fake);

    s.submit("rain").await;
    assert_eq!(page(&s).status, "Error: connection refused");

    assert!(matches!(
        s.submit("rain").await,
        SubmitOutcome::Failed(SearchError::Decode(_))
    ));
    assert!(page(&s).status.starts_with("Error: "));
}

#[tokio::test]
async fn stale_response_is_dropped() {
    let fake = Arc::new(FakeTransport::default());
    fake.push_delayed(
        Duration::from_millis(50),
        ok_json(json!({ "query": "slow", "results_main": [{ "title": "Old" }] })),
    );
    fake.push(ok_json(json!({ "query": "fast", "results_main": [{ "title": "New" }] })));
    let s = session(fake.clone());

    let (first, second) = tokio::join!(s.submit("slow"), s.submit("fast"));
    assert_eq!(first, SubmitOutcome::Superseded);
    assert_eq!(second, SubmitOutcome::Rendered);
    assert_eq!(fake.call_count(), 2);

    let p = page(&s);
    assert!(p.status.contains("fast"));
    assert!(p.main.contains("New"));
    assert!(!p.main.contains("Old"));
}

#[tokio::test]
async fn stale_failure_does_not_overwrite_newer_result() {
    let fake = Arc::new(FakeTransport::default());
    fake.push_delayed(Duration::from_millis(50), status(500, "late failure"));
    fake.push(ok_json(ipanema_response()));
    let s = session(fake);

    let (first, second) = tokio::join!(s.submit("one"), s.submit("two"));
    assert_eq!(first, SubmitOutcome::Superseded);
    assert_eq!(second, SubmitOutcome::Rendered);
    assert!(page(&s).status.starts_with("OK"));
}

#[test]
fn status_line_text_before_escaping() {
    let resp: findmusic_api::SearchResponse =
        serde_json::from_value(ipanema_response()).expect("valid response");
    assert_eq!(
        findmusic_client::status::ok_line(&resp),
        "OK • requête: \"jazz brésilien\" (FR)"
    );
    assert_eq!(
        findmusic_client::status::error_line(&SearchError::RequestFailed("internal error".into())),
        "Error: internal error"
    );
}
