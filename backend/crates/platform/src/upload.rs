//! Upload Storage Infrastructure
//!
//! Stores uploaded files under a public directory with a
//! uniqueness-guaranteeing time-based filename prefix.
//!
//! Acquisition is scoped: bytes are written to a temporary sibling file
//! that is removed on every failure path, then renamed into place, so a
//! crashed request never leaves a partial upload behind.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Upload storage errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// Original filename was empty or reduced to nothing after sanitizing
    #[error("Upload has no usable filename")]
    InvalidName,

    /// Filesystem failure
    #[error("Upload I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored upload: where it lives on disk and how clients address it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Path served to browsers (e.g. `/uploads/1700000000000-avatar.png`)
    pub public_path: String,
    /// Absolute/relative location on disk
    pub disk_path: PathBuf,
}

/// File store for user uploads
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    public_prefix: String,
}

impl UploadStore {
    /// Create a store rooted at `root`, served under `public_prefix`
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Persist `bytes` under a unique name derived from `original_name`
    ///
    /// Returns the final public and disk paths. The temporary file is
    /// removed on all failure paths.
    pub async fn store(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        let sanitized = sanitize_filename(original_name);
        if sanitized.is_empty() {
            return Err(UploadError::InvalidName);
        }

        tokio::fs::create_dir_all(&self.root).await?;

        let filename = format!("{}-{}", now_millis(), sanitized);
        let final_path = self.root.join(&filename);

        // Write to a sibling temp file first, rename into place after.
        let temp = TempFile::new(self.root.join(format!("{}.part", filename)));
        tokio::fs::write(temp.path(), bytes).await?;
        tokio::fs::rename(temp.path(), &final_path).await?;
        temp.persist();

        Ok(StoredUpload {
            public_path: format!("{}/{}", self.public_prefix, filename),
            disk_path: final_path,
        })
    }
}

/// Temp file guard: removes the file on drop unless persisted
struct TempFile {
    path: PathBuf,
    persisted: std::cell::Cell<bool>,
}

impl TempFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            persisted: std::cell::Cell::new(false),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        self.persisted.set(true);
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.persisted.get() {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Keep only filesystem-safe characters from a client-supplied filename
fn sanitize_filename(name: &str) -> String {
    // Strip any client-supplied directory components first
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_matches('.')
        .to_string()
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
