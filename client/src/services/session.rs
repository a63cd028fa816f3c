//! # Session Store
//!
//! Holds the opaque authentication token issued at login.
//!
//! The token is cached in memory and persisted through a [`TokenStorage`]
//! backend so that it survives restarts. Nothing about the token is validated
//! locally: expiry is only discovered when the server rejects a request.
//!
//! ```rust,no_run
//! # async fn demo() -> dairy_client::core::Result<()> {
//! use dairy_client::services::session::{MemoryTokenStorage, SessionStore};
//! use std::sync::Arc;
//!
//! let session = SessionStore::new(Arc::new(MemoryTokenStorage::default()));
//! session.set("abc123").await?;
//! assert_eq!(session.get().await.as_deref(), Some("abc123"));
//! session.clear().await?;
//! assert!(session.get().await.is_none());
//! # Ok(())
//! # }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// Persistent key-value slot for the session token
#[async_trait]
pub trait TokenStorage: Send + Sync {
    async fn load(&self) -> Result<Option<String>>;
    async fn store(&self, token: &str) -> Result<()>;
    async fn remove(&self) -> Result<()>;
}

/// On-disk layout of the session file
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
}

/// Stores the token as a small JSON file.
///
/// A missing file means "no session". Writes go to a sibling temp file and are
/// renamed into place so a crash never leaves a half-written token behind.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<String>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let persisted: PersistedSession = serde_json::from_str(&content)
            .map_err(|e| AppError::Storage(format!("corrupt session file: {}", e)))?;

        if persisted.token.is_empty() {
            return Ok(None);
        }
        Ok(Some(persisted.token))
    }

    async fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string(&PersistedSession {
            token: token.to_string(),
        })
        .map_err(|e| AppError::Storage(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn remove(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    async fn store(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// Cache state: `None` until the backend has been read once
type Cached = Option<Option<String>>;

/// Shared handle to the current session. Cloning shares the same session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    cached: Arc<RwLock<Cached>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            storage,
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Ephemeral session with no persistence
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStorage::default()))
    }

    /// Current token, reading the backend on first use.
    ///
    /// A storage failure is logged and treated as "no session".
    pub async fn get(&self) -> Option<String> {
        if let Some(known) = self.cached.read().clone() {
            return known;
        }

        let loaded = match self.storage.load().await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read session token, treating as logged out");
                None
            }
        };

        let mut cached = self.cached.write();
        // A concurrent set/clear wins over the value we just loaded
        if cached.is_none() {
            *cached = Some(loaded);
        }
        cached.clone().flatten()
    }

    /// Store a new token.
    ///
    /// The in-memory value is updated before persisting, so the token stays usable
    /// for this process even if the write fails.
    pub async fn set(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        *self.cached.write() = Some(Some(token.clone()));
        self.storage.store(&token).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist session token");
        })?;
        tracing::info!("Session token stored");
        Ok(())
    }

    /// Forget the token in memory and in storage
    pub async fn clear(&self) -> Result<()> {
        *self.cached.write() = Some(None);
        self.storage.remove().await?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &*self.cached.read() {
            None => "unread",
            Some(None) => "absent",
            Some(Some(_)) => "present",
        };
        f.debug_struct("SessionStore").field("token", &state).finish()
    }
}
