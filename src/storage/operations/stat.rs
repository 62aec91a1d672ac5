use crate::error::Result;
use crate::storage::local::LocalFs;
use crate::storage::memory::MemoryFs;
use crate::storage::utils::path::{normalize_dir, split_entry_path};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Trait for checking whether a path is taken.
pub trait Stater {
    /// True when something (file, directory, symlink, even a dangling one)
    /// already lives at `path`.
    async fn exists(&self, path: &Path) -> Result<bool>;
}

impl Stater for LocalFs {
    async fn exists(&self, path: &Path) -> Result<bool> {
        match fs::symlink_metadata(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl Stater for MemoryFs {
    async fn exists(&self, path: &Path) -> Result<bool> {
        let tree = self.lock();
        if tree.dirs.contains_key(&normalize_dir(path)) {
            return Ok(true);
        }
        Ok(split_entry_path(path)
            .and_then(|(dir, name)| tree.dirs.get(&dir).map(|names| names.contains(&name)))
            .unwrap_or(false))
    }
}
