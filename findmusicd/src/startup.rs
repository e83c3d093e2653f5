use std::net::SocketAddr;

use anyhow::{Context, Result};
use findmusic_client::{ClientConfig, QueryClient};
use tracing_subscriber::EnvFilter;

pub const ADDR_ENV: &str = "FINDMUSIC_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Everything `main` needs, resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub client: ClientConfig,
}

impl Settings {
    /// - FINDMUSIC_PROXY_URL (required)
    /// - FINDMUSIC_ADDR (default 127.0.0.1:8080)
    pub fn from_env() -> Result<Self> {
        let client = ClientConfig::from_env().context("proxy configuration")?;
        let raw = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw
            .trim()
            .parse()
            .with_context(|| format!("{ADDR_ENV} is not a socket address: {raw:?}"))?;
        Ok(Self { addr, client })
    }

    pub fn query_client(&self) -> Result<QueryClient> {
        QueryClient::new(self.client.clone()).context("http client init failed")
    }
}

/// INFO unless RUST_LOG says otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
