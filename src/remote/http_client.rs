use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::sync::{RawResponse, Transport};

/// `Transport` over HTTP. Statuses are passed through untouched; only failures to get
/// a response at all become errors.
pub struct HttpTransport {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("resync")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn finish(resp: reqwest::Response, label: &str) -> Result<RawResponse> {
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("{} body", label))?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawResponse> {
        let label = format!("GET {}", path);
        let resp = self
            .authorize(self.client.get(self.url(path)))
            .send()
            .await
            .with_context(|| label.clone())?;
        Self::finish(resp, &label).await
    }

    async fn put_json(&self, path: &str, body: &serde_json::Value) -> Result<RawResponse> {
        let label = format!("PUT {}", path);
        let resp = self
            .authorize(self.client.put(self.url(path)))
            .json(body)
            .send()
            .await
            .with_context(|| label.clone())?;
        Self::finish(resp, &label).await
    }
}
