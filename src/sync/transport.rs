use anyhow::Result;
use async_trait::async_trait;

/// Status and raw body of one HTTP exchange. Interpreting the status is left to the
/// controllers.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Remote collection endpoint access. `Err` means the request never produced a
/// response (connect failure, timeout, broken body).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<RawResponse>;
    async fn put_json(&self, path: &str, body: &serde_json::Value) -> Result<RawResponse>;
}
