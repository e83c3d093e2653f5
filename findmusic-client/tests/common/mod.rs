#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use findmusic_client::transport::{ProxyResponse, Transport};
use findmusic_client::{ClientConfig, QueryClient, SearchError};
use url::Url;

pub struct Scripted {
    pub delay: Duration,
    pub reply: Result<ProxyResponse, SearchError>,
}

/// Records every call and answers from a script, in order.
#[derive(Default)]
pub struct FakeTransport {
    pub calls: Mutex<Vec<(String, Vec<u8>)>>,
    script: Mutex<VecDeque<Scripted>>,
}

impl FakeTransport {
    pub fn push(&self, reply: Result<ProxyResponse, SearchError>) {
        self.push_delayed(Duration::ZERO, reply);
    }

    pub fn push_delayed(&self, delay: Duration, reply: Result<ProxyResponse, SearchError>) {
        self.script.lock().unwrap().push_back(Scripted { delay, reply });
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn answer(&self, url: &Url, body: Vec<u8>) -> Result<ProxyResponse, SearchError> {
        let next = {
            self.calls.lock().unwrap().push((url.to_string(), body));
            self.script.lock().unwrap().pop_front()
        };
        let Some(next) = next else {
            return Err(SearchError::Transport("no scripted reply".into()));
        };
        if !next.delay.is_zero() {
            tokio::time::sleep(next.delay).await;
        }
        next.reply
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<ProxyResponse, SearchError> {
        self.answer(url, body).await
    }

    async fn get(&self, url: &Url) -> Result<ProxyResponse, SearchError> {
        self.answer(url, Vec::new()).await
    }
}

pub fn ok_json(v: serde_json::Value) -> Result<ProxyResponse, SearchError> {
    Ok(ProxyResponse {
        code: 200,
        body: serde_json::to_vec(&v).unwrap(),
    })
}

pub fn status(code: u16, body: &str) -> Result<ProxyResponse, SearchError> {
    Ok(ProxyResponse {
        code,
        body: body.as_bytes().to_vec(),
    })
}

pub fn client_with(fake: Arc<FakeTransport>) -> QueryClient {
    let config = ClientConfig::new("https://proxy.test").unwrap();
    QueryClient::with_transport(config, fake)
}

pub fn ipanema_response() -> serde_json::Value {
    serde_json::json!({
        "query": "jazz brésilien",
        "language_query": "fr",
        "results_main": [{
            "title": "Ipanema",
            "artist": "Tom Jobim",
            "relevance": 0.91,
            "language_original": "pt",
            "snippet": "Olha que coisa mais linda"
        }],
        "results_secondary": []
    })
}
