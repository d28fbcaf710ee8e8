use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, AttributeValue, ObjectStore, PutOptions, PutPayload};

use super::{ReviewSink, SinkError};
use crate::application::review::export::CONTENT_TYPE;
use crate::infra::app_config::{ConfigError, GcpConfig, StorageBackend, StorageConfig};

/// Sink backed by any `object_store` implementation.
pub struct ObjectStoreSink {
    store: Arc<dyn ObjectStore>,
    target: String,
    /// The local filesystem store rejects object attributes.
    with_content_type: bool,
}

impl ObjectStoreSink {
    pub fn new(store: Arc<dyn ObjectStore>, target: impl Into<String>) -> Self {
        Self {
            store,
            target: target.into(),
            with_content_type: true,
        }
    }

    /// In-memory sink plus a handle for reading back what was written.
    pub fn in_memory() -> (Self, Arc<InMemory>) {
        let memory = Arc::new(InMemory::new());
        let store: Arc<dyn ObjectStore> = memory.clone();
        (Self::new(store, "memory"), memory)
    }

    pub fn local(root: &Path) -> Result<Self, SinkError> {
        std::fs::create_dir_all(root)?;
        let store = LocalFileSystem::new_with_prefix(root)?;
        Ok(Self {
            store: Arc::new(store),
            target: format!("file://{}", root.display()),
            with_content_type: false,
        })
    }

    pub fn gcs(config: &GcpConfig) -> Result<Self, SinkError> {
        if config.bucket_name.trim().is_empty() {
            return Err(ConfigError::MissingGcp("bucket_name").into());
        }

        let mut builder =
            GoogleCloudStorageBuilder::from_env().with_bucket_name(&config.bucket_name);
        if let Some(key) = &config.service_account_info {
            builder = builder.with_service_account_key(key);
        } else if let Some(path) = &config.service_account_path {
            builder = builder.with_service_account_path(path.to_string_lossy());
        } else {
            log::warn!("No service account configured, falling back to ambient GCP credentials");
        }

        let store = builder.build()?;
        log::info!(
            "Using GCS bucket {} (project {})",
            config.bucket_name,
            config.project_id
        );
        Ok(Self::new(
            Arc::new(store),
            format!("gs://{}", config.bucket_name),
        ))
    }

    pub fn from_config(storage: &StorageConfig) -> Result<Self, SinkError> {
        match storage.backend {
            StorageBackend::Gcs => {
                let gcp = storage
                    .gcp
                    .as_ref()
                    .ok_or(ConfigError::MissingGcp("[storage.gcp]"))?;
                Self::gcs(gcp)
            }
            StorageBackend::Local => Self::local(&storage.local_root),
            StorageBackend::Memory => {
                log::warn!("Reviews are kept in memory only and are lost on exit");
                Ok(Self::in_memory().0)
            }
        }
    }
}

#[async_trait]
impl ReviewSink for ObjectStoreSink {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<(), SinkError> {
        let location = ObjectPath::parse(path)?;
        let mut opts = PutOptions::default();
        if self.with_content_type {
            opts.attributes
                .insert(Attribute::ContentType, AttributeValue::from(CONTENT_TYPE));
        }

        let size = bytes.len();
        self.store
            .put_opts(&location, PutPayload::from(bytes), opts)
            .await?;
        log::debug!("Wrote {size} bytes to {}/{location}", self.target);
        Ok(())
    }

    fn describe(&self) -> String {
        self.target.clone()
    }
}
