use anyhow::Result;
use dotenv::dotenv;
use findmusicd::{router, startup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    startup::init_tracing();

    let settings = startup::Settings::from_env()?;
    tracing::info!(
        proxy = %settings.client.proxy_base_url(),
        "search proxy configured"
    );
    let app = router::app(settings.query_client()?);

    let listener = TcpListener::bind(settings.addr).await?;
    tracing::info!("findmusicd listening on http://{}", settings.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
