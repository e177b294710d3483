use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{CollectionState, Transport};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reads one remote collection endpoint and installs the result into its state.
///
/// Failures leave the previous snapshot in place and only reach the log. There is no
/// retry and no sequencing between overlapping calls: the last one to finish wins.
pub struct FetchController<V> {
    transport: Arc<dyn Transport>,
    endpoint: String,
    state: CollectionState<V>,
}

impl<V> Clone for FetchController<V> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
            state: self.state.clone(),
        }
    }
}

impl<V> FetchController<V>
where
    V: DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        state: CollectionState<V>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            state,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> &CollectionState<V> {
        &self.state
    }

    pub(super) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub async fn fetch(&self) -> Result<Arc<V>, FetchError> {
        match self.read().await {
            Ok(value) => {
                let value = Arc::new(value);
                if !self.state.commit(Arc::clone(&value)) {
                    tracing::debug!(endpoint = %self.endpoint, "component inactive; dropping fetched snapshot");
                }
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(endpoint = %self.endpoint, error = %err, "fetch failed; keeping previous snapshot");
                Err(err)
            }
        }
    }

    async fn read(&self) -> Result<V, FetchError> {
        let resp = self
            .transport
            .get(&self.endpoint)
            .await
            .map_err(|err| FetchError::Transport(format!("{:#}", err)))?;
        if !resp.is_ok() {
            return Err(FetchError::Status(resp.status));
        }
        Ok(serde_json::from_slice(&resp.body)?)
    }

    /// Starts a fetch on the current tokio runtime. The outcome is already logged, so
    /// the handle can be dropped.
    pub fn spawn(&self) -> tokio::task::JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            let _ = this.fetch().await;
        })
    }
}

#[cfg(test)]
#[path = "../tests/sync/fetch_tests.rs"]
mod tests;
