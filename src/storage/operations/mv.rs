use crate::error::{Error, Result};
use crate::storage::local::LocalFs;
use crate::storage::memory::MemoryFs;
use crate::storage::utils::path::split_entry_path;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Trait for renaming an entry inside its folder.
pub trait Mover {
    /// Rename `src` to `dst`. Renaming a path onto itself is a no-op.
    ///
    /// Existing destinations follow the platform's rename semantics; callers
    /// that must not overwrite check with a `Stater` first.
    async fn rename(&self, src: &Path, dst: &Path) -> Result<()>;
}

impl Mover for LocalFs {
    async fn rename(&self, src: &Path, dst: &Path) -> Result<()> {
        match fs::rename(src, dst).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::PathNotFound {
                path: src.to_path_buf(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

impl Mover for MemoryFs {
    async fn rename(&self, src: &Path, dst: &Path) -> Result<()> {
        let (src_dir, src_name) = split_entry_path(src).ok_or_else(|| Error::PathNotFound {
            path: src.to_path_buf(),
        })?;
        let (dst_dir, dst_name) = split_entry_path(dst).ok_or_else(|| Error::InvalidArgument {
            message: format!("invalid rename destination: {}", dst.display()),
        })?;
        if src_dir != dst_dir {
            return Err(Error::InvalidArgument {
                message: "memory backend only renames within a folder".to_string(),
            });
        }

        let mut tree = self.lock();
        let names = tree
            .dirs
            .get_mut(&src_dir)
            .ok_or_else(|| Error::PathNotFound {
                path: src.to_path_buf(),
            })?;
        if !names.contains(&src_name) {
            return Err(Error::PathNotFound {
                path: src.to_path_buf(),
            });
        }

        if src_name != dst_name {
            // rename(2) replaces an existing destination
            names.retain(|name| *name != dst_name);
            if let Some(entry) = names.iter_mut().find(|name| **name == src_name) {
                *entry = dst_name;
            }
        }
        tree.mutations += 1;
        Ok(())
    }
}
