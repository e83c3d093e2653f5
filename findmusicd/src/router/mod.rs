use axum::routing::get;
use axum::Router;
use findmusic_client::QueryClient;

mod api;
mod ui;

pub use ui::render_document;

#[derive(Clone)]
pub struct AppState {
    client: QueryClient,
}

pub fn app(client: QueryClient) -> Router {
    Router::new()
        .route("/", get(ui::serve_index))
        .route("/search", get(ui::serve_search))
        .route("/health/ready", get(api::health_ready))
        .with_state(AppState { client })
}
