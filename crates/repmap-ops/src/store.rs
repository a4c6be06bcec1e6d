//! Signup persistence backends.
//!
//! Each backend performs a single insert per signup. There is no retry, no
//! deduplication and no cross-request coordination.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use repmap_core::SignupRecord;
use serde::Deserialize;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::{Config, StoreKind};
use crate::error::{OpsError, OpsResult};

/// A destination for signups.
#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Persist one record and return whatever the backend reports back.
    async fn insert(&self, record: &SignupRecord) -> OpsResult<Value>;
}

/// Build the store selected by `config`.
pub fn open_store(config: &Config) -> OpsResult<Arc<dyn SignupStore>> {
    let store: Arc<dyn SignupStore> = match config.store {
        StoreKind::Memory => Arc::new(MemoryStore::default()),
        StoreKind::Jsonl => Arc::new(JsonlStore::new(&config.jsonl_path)),
        StoreKind::Supabase => {
            let url = config
                .supabase_url
                .as_deref()
                .ok_or(OpsError::StoreNotConfigured {
                    backend: "supabase",
                    missing: "SUPABASE_URL",
                })?;
            let key = config
                .supabase_anon_key
                .as_deref()
                .ok_or(OpsError::StoreNotConfigured {
                    backend: "supabase",
                    missing: "SUPABASE_ANON_KEY",
                })?;
            Arc::new(SupabaseStore::new(url, key, &config.supabase_table))
        }
    };
    info!(backend = store.backend(), "signup_store_opened");
    Ok(store)
}

// =============================================================================
// Memory
// =============================================================================

/// Keeps signups in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<SignupRecord>>,
}

impl MemoryStore {
    /// Snapshot of everything stored so far.
    pub async fn records(&self) -> Vec<SignupRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl SignupStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, record: &SignupRecord) -> OpsResult<Value> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        debug!(total = records.len(), "memory_store: inserted");
        Ok(serde_json::to_value(record)?)
    }
}

// =============================================================================
// JSON lines
// =============================================================================

/// Appends one JSON object per line to a file.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    // Serialises appends so lines never interleave.
    write_lock: Mutex<()>,
}

impl JsonlStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SignupStore for JsonlStore {
    fn backend(&self) -> &'static str {
        "jsonl"
    }

    async fn insert(&self, record: &SignupRecord) -> OpsResult<Value> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        debug!(path = %self.path.display(), "jsonl_store: appended");
        Ok(serde_json::to_value(record)?)
    }
}

// =============================================================================
// Supabase
// =============================================================================

/// Inserts into a Supabase table through its PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    endpoint: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

impl SupabaseStore {
    pub fn new(url: &str, anon_key: &str, table: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/rest/v1/{}", url.trim_end_matches('/'), table),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SignupStore for SupabaseStore {
    fn backend(&self) -> &'static str {
        "supabase"
    }

    async fn insert(&self, record: &SignupRecord) -> OpsResult<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "supabase_store: inserted");
            return Ok(Value::Null);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<PostgrestError>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("Supabase insert failed with status {}", status));
        warn!(status = %status, error = %message, "supabase_store: insert rejected");
        Err(OpsError::Store(message))
    }
}
