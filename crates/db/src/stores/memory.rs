use std::collections::BTreeMap;

use async_trait::async_trait;
use defensesync_core::{models::response::Response, store::ResponseStore};
use eyre::Result;
use tokio::sync::RwLock;

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    responses: RwLock<BTreeMap<String, Response>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseStore for MemoryStore {
    async fn get(&self, judge_id: &str) -> Result<Option<Response>> {
        Ok(self.responses.read().await.get(judge_id).cloned())
    }

    async fn put(&self, judge_id: &str, response: &Response) -> Result<()> {
        self.responses
            .write()
            .await
            .insert(judge_id.to_string(), response.clone());
        Ok(())
    }

    async fn list(&self) -> Result<BTreeMap<String, Response>> {
        Ok(self.responses.read().await.clone())
    }
}
