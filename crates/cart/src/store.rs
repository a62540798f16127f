//! Key-value persistence for cart state.
//!
//! The cart is persisted through a deliberately narrow capability: string
//! keys to string values, read and write only. Keeping the surface this
//! small makes the failure paths explicit and testable without a real
//! storage backend.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Errors that a [`CartStore`] can report.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying storage I/O failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The write would exceed the store's capacity.
    #[error("storage quota exceeded: {needed} bytes needed, {quota} byte quota")]
    QuotaExceeded {
        /// Configured capacity in bytes.
        quota: usize,
        /// Bytes the store would hold after the write.
        needed: usize,
    },

    /// The storage backend cannot be reached.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous key-value persistence capability.
///
/// Implementations store opaque strings under fixed keys. Reads of an
/// absent key return `Ok(None)`; all failures surface as [`StoreError`] so
/// the caller decides how to degrade.
pub trait CartStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the value cannot be stored.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a map.
///
/// An optional byte quota over the sum of stored keys and values makes
/// quota-exceeded handling testable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store that rejects writes past `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    fn bytes_after_write(&self, key: &str, value: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
            + key.len()
            + value.len()
    }
}

impl CartStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let needed = self.bytes_after_write(key, value);
            if needed > quota {
                return Err(StoreError::QuotaExceeded { quota, needed });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable store keeping one file per key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are namespaced strings, not paths; map anything unexpected
        // to '-' so a key can never escape the store directory.
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{sanitized}.json"))
    }
}

impl CartStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
