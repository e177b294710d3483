use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::FetchController;

/// Asks the user whether a transition should go ahead.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Shows an acknowledgement after a successful write.
pub trait Notify: Send + Sync {
    fn notify(&self, message: &str);
}

/// A single state-transition write against one server-keyed item.
pub trait Transition: Send + Sync {
    /// Prompt shown before the write.
    fn describe(&self) -> String;
    fn path(&self) -> &str;
    fn body(&self) -> serde_json::Value;
    fn acknowledgement(&self) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    Declined,
    /// The write succeeded; `resynced` is false when the follow-up fetch failed and the
    /// pre-write snapshot is still shown.
    Applied { resynced: bool },
}

#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Confirm, write, then resync from the server.
///
/// The snapshot is never patched locally: after a write the only way the change shows
/// up is the fresh fetch. Write failures are logged and otherwise silent.
pub struct MutationController<V> {
    fetch: FetchController<V>,
    confirm: Arc<dyn Confirm>,
    notify: Arc<dyn Notify>,
}

impl<V> Clone for MutationController<V> {
    fn clone(&self) -> Self {
        Self {
            fetch: self.fetch.clone(),
            confirm: Arc::clone(&self.confirm),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl<V> MutationController<V>
where
    V: DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(
        fetch: FetchController<V>,
        confirm: Arc<dyn Confirm>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        Self {
            fetch,
            confirm,
            notify,
        }
    }

    pub fn fetch_controller(&self) -> &FetchController<V> {
        &self.fetch
    }

    pub async fn mutate(&self, transition: &dyn Transition) -> Result<MutationOutcome, MutationError> {
        let prompt = transition.describe();
        if !self.confirm.confirm(&prompt) {
            tracing::debug!(path = transition.path(), "mutation declined");
            return Ok(MutationOutcome::Declined);
        }

        if let Err(err) = self.write(transition).await {
            tracing::warn!(path = transition.path(), error = %err, "mutation failed");
            return Err(err);
        }

        self.notify.notify(&transition.acknowledgement());
        let resynced = self.fetch.fetch().await.is_ok();
        tracing::info!(
            path = transition.path(),
            endpoint = self.fetch.endpoint(),
            resynced,
            "mutation applied"
        );
        Ok(MutationOutcome::Applied { resynced })
    }

    async fn write(&self, transition: &dyn Transition) -> Result<(), MutationError> {
        let resp = self
            .fetch
            .transport()
            .put_json(transition.path(), &transition.body())
            .await
            .map_err(|err| MutationError::Transport(format!("{:#}", err)))?;
        if !resp.is_ok() {
            return Err(MutationError::Status(resp.status));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/sync/mutate_tests.rs"]
mod tests;
