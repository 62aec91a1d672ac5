use crate::error::Result;
use crate::storage::utils::path::display_path;
use crate::wrap_err;
use std::ffi::OsString;
use std::path::Path;

mod local;
mod memory;
mod operations;
pub mod utils;

pub use self::local::LocalFs;
pub use self::memory::MemoryFs;
pub use self::operations::{Lister, Mover, Stater};

#[derive(Debug, Clone)]
enum Backend {
    Local(LocalFs),
    Memory(MemoryFs),
}

/// Storage client for the folder being renamed.
#[derive(Debug, Clone)]
pub struct StorageClient {
    backend: Backend,
}

impl StorageClient {
    /// Client backed by the local filesystem.
    pub fn local() -> Self {
        Self {
            backend: Backend::Local(LocalFs::new()),
        }
    }

    /// Client backed by an in-memory tree; the caller keeps a clone of `fs`
    /// to inspect the result.
    pub fn memory(fs: MemoryFs) -> Self {
        Self {
            backend: Backend::Memory(fs),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Local(_) => "local",
            Backend::Memory(_) => "memory",
        }
    }

    pub async fn list_entries(&self, folder: &str) -> Result<Vec<OsString>> {
        log::debug!(
            "list_entries backend={} folder={}",
            self.backend_name(),
            folder
        );
        let dir = Path::new(folder);
        let listed = match &self.backend {
            Backend::Local(fs) => fs.list(dir).await,
            Backend::Memory(fs) => fs.list(dir).await,
        };
        wrap_err!(
            listed,
            ListDirectoryFailed {
                path: folder.to_string()
            }
        )
    }

    pub async fn exists(&self, path: &Path) -> Result<bool> {
        log::debug!(
            "exists backend={} path={}",
            self.backend_name(),
            path.display()
        );
        let checked = match &self.backend {
            Backend::Local(fs) => fs.exists(path).await,
            Backend::Memory(fs) => fs.exists(path).await,
        };
        wrap_err!(
            checked,
            StatFailed {
                path: display_path(path)
            }
        )
    }

    pub async fn rename(&self, src: &Path, dst: &Path) -> Result<()> {
        log::debug!(
            "rename backend={} src={} dst={}",
            self.backend_name(),
            src.display(),
            dst.display()
        );
        let renamed = match &self.backend {
            Backend::Local(fs) => fs.rename(src, dst).await,
            Backend::Memory(fs) => fs.rename(src, dst).await,
        };
        wrap_err!(
            renamed,
            RenameFailed {
                src_path: display_path(src),
                dest_path: display_path(dst)
            }
        )
    }
}
