use std::collections::BTreeMap;

use async_trait::async_trait;
use defensesync_core::{models::response::Response, store::ResponseStore};
use mockall::mock;

// Mock store for service and handler tests
mock! {
    pub ResponseStore {}

    #[async_trait]
    impl ResponseStore for ResponseStore {
        async fn get(&self, judge_id: &str) -> eyre::Result<Option<Response>>;

        async fn put(&self, judge_id: &str, response: &Response) -> eyre::Result<()>;

        async fn list(&self) -> eyre::Result<BTreeMap<String, Response>>;
    }
}
