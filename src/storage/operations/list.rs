use crate::error::{Error, Result};
use crate::storage::memory::MemoryFs;
use crate::storage::local::LocalFs;
use crate::storage::utils::path::normalize_dir;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Trait for listing the entries of a single folder.
pub trait Lister {
    /// Names of the entries directly inside `dir`, in the order the backend
    /// yields them. Files, directories and symlinks are all included, and
    /// names are returned as the platform gives them, UTF-8 or not.
    async fn list(&self, dir: &Path) -> Result<Vec<OsString>>;
}

impl Lister for LocalFs {
    async fn list(&self, dir: &Path) -> Result<Vec<OsString>> {
        let mut reader = match fs::read_dir(dir).await {
            Ok(reader) => reader,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::PathNotFound {
                    path: dir.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            names.push(entry.file_name());
        }
        Ok(names)
    }
}

impl Lister for MemoryFs {
    async fn list(&self, dir: &Path) -> Result<Vec<OsString>> {
        self.lock()
            .dirs
            .get(&normalize_dir(dir))
            .map(|names| names.iter().map(OsString::from).collect())
            .ok_or_else(|| Error::PathNotFound {
                path: dir.to_path_buf(),
            })
    }
}
