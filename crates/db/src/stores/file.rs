//! # JSON Document Store
//!
//! Keeps every response in a single human-readable JSON object keyed by judge
//! id. Because the whole document is rewritten on each submission, writers
//! are serialized through one lock: each `put` re-reads the current document
//! while holding it, replaces its own key and writes the result back. Two
//! judges submitting at the same time therefore never overwrite each other.
//!
//! The new document is written to a sibling `.tmp` file, flushed, then renamed
//! over the original, so readers observe either the previous or the next
//! document and never a partial one.

use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use defensesync_core::{models::response::Response, store::ResponseStore};
use eyre::{Result, WrapErr};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, warn};

type Document = BTreeMap<String, Response>;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// The document is created on the first `put`; it does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        PathBuf::from(temp)
    }

    /// `Ok(None)` when the document has never been written.
    async fn read_document(&self) -> Result<Option<Document>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .wrap_err_with(|| format!("Failed to read {}", self.path.display()));
            }
        };

        let document = serde_json::from_slice(&bytes)
            .wrap_err_with(|| format!("Corrupt response document {}", self.path.display()))?;

        Ok(Some(document))
    }

    /// Reads for `get`/`list`: an unreadable document counts as empty.
    async fn read_document_lenient(&self) -> Document {
        match self.read_document().await {
            Ok(document) => document.unwrap_or_default(),
            Err(err) => {
                warn!("Treating response document as empty: {:#}", err);
                Document::new()
            }
        }
    }

    async fn write_document(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }

        let bytes = serde_json::to_vec_pretty(document)?;
        let temp = self.temp_path();

        let written = async {
            let mut file = fs::File::create(&temp).await?;
            file.write_all(&bytes).await?;
            file.sync_all().await?;
            fs::rename(&temp, &self.path).await
        }
        .await;

        if let Err(err) = written {
            let _ = fs::remove_file(&temp).await;
            return Err(err)
                .wrap_err_with(|| format!("Failed to write {}", self.path.display()));
        }

        Ok(())
    }
}

#[async_trait]
impl ResponseStore for JsonFileStore {
    async fn get(&self, judge_id: &str) -> Result<Option<Response>> {
        Ok(self.read_document_lenient().await.remove(judge_id))
    }

    async fn put(&self, judge_id: &str, response: &Response) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        // A corrupt document is left alone rather than replaced with a single entry
        let mut document = self.read_document().await?.unwrap_or_default();
        document.insert(judge_id.to_string(), response.clone());
        self.write_document(&document).await?;

        debug!(judge_id, entries = document.len(), "Response document rewritten");

        Ok(())
    }

    async fn list(&self) -> Result<BTreeMap<String, Response>> {
        Ok(self.read_document_lenient().await)
    }
}
