// src/core/net.rs
// Blocking HTTP GET behind a small trait so the crawl can run against saved pages.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::NetError;

/// Where page bodies come from. Only 2xx bodies are returned; anything else is an
/// error and the page never reaches the extractors.
pub trait PageSource: Sync {
    fn fetch(&self, url: &str) -> Result<String, NetError>;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
}

fn client_builder() -> reqwest::blocking::ClientBuilder {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
}

impl HttpSource {
    pub fn new() -> Result<Self, NetError> {
        Ok(Self { client: client_builder().build()? })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, NetError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status { status: status.as_u16(), url: url.to_string() });
        }
        Ok(resp.text()?)
    }
}

/// In-memory pages keyed by URL. Used for offline runs and tests.
#[derive(Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self { Self::default() }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }
}

impl PageSource for StaticSource {
    fn fetch(&self, url: &str) -> Result<String, NetError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| NetError::Missing(url.to_string()))
    }
}
