use std::collections::BTreeMap;

use async_trait::async_trait;
use eyre::Result;

use crate::models::response::Response;

/// Durable mapping from judge id to that judge's latest [`Response`].
///
/// Implementations own all synchronization: a `put` is either fully visible
/// to later `get`s or not at all, and concurrent `put`s for different judges
/// must both survive.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Returns `Ok(None)` when the judge has not responded yet.
    async fn get(&self, judge_id: &str) -> Result<Option<Response>>;

    /// Replaces whatever is stored for `judge_id` with `response`.
    async fn put(&self, judge_id: &str, response: &Response) -> Result<()>;

    async fn list(&self) -> Result<BTreeMap<String, Response>>;
}
