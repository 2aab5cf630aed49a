//! Upload file store
//!
//! Accepts raw byte streams and writes them under a configured root with
//! random stored names. The caller-supplied filename is recorded but never
//! used on disk, so path traversal in it is inert.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Metadata for one stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// The filename the caller claimed. Informational only.
    pub original_name: String,
    /// The random name the bytes were stored under.
    pub stored_name: String,
    /// Absolute or root-relative path of the stored file on disk.
    pub path: PathBuf,
}

/// Byte-stream storage rooted at one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `root`, creating the directory if
    /// needed.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FileStore { root })
    }

    /// Store `bytes` under a fresh random name.
    pub fn store(&self, original_name: &str, bytes: &[u8]) -> io::Result<StoredFile> {
        let stored_name = Uuid::new_v4().simple().to_string();
        let path = self.root.join(&stored_name);
        fs::write(&path, bytes)?;
        tracing::debug!(
            target: "mergelab::service",
            original = original_name,
            stored = %stored_name,
            size = bytes.len(),
            "upload stored"
        );
        Ok(StoredFile {
            original_name: original_name.to_string(),
            stored_name,
            path,
        })
    }

    /// The root directory uploads land in.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
