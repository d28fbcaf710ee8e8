//! Review persistence.
//!
//! A sink receives the finished review JSON for one entry and stores it under
//! a path derived from the entry uid. Uploads either fully succeed or fail;
//! there is no retry here.

mod store;

pub use store::ObjectStoreSink;

use async_trait::async_trait;
use thiserror::Error;

use crate::infra::app_config::ConfigError;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Upload failed: {0}")]
    Store(#[from] object_store::Error),

    #[error("Invalid object path: {0}")]
    InvalidPath(#[from] object_store::path::Error),

    #[error("Failed to serialize review: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage setup failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage setup failed: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait ReviewSink: Send + Sync {
    /// Store `bytes` at `path`. Succeeds only once the object is written.
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<(), SinkError>;

    /// Human-readable target, for logs and notices.
    fn describe(&self) -> String;
}
