use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::error::SearchError;

/// Status and raw body of one proxy exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub code: u16,
    pub body: Vec<u8>,
}

impl ProxyResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The single network seam of the client. One call is one attempt.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<ProxyResponse, SearchError>;
    async fn get(&self, url: &Url) -> Result<ProxyResponse, SearchError>;
}

/// `reqwest`-backed transport. No timeout is set; the platform default applies.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, SearchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<ProxyResponse, SearchError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        read_response(response).await
    }

    async fn get(&self, url: &Url) -> Result<ProxyResponse, SearchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<ProxyResponse, SearchError> {
    let code = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| SearchError::Transport(e.to_string()))?;
    Ok(ProxyResponse {
        code,
        body: body.to_vec(),
    })
}
