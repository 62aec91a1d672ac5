use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::storage::utils::path::normalize_dir;

/// In-process directory tree.
///
/// Each folder keeps its entry names in insertion order, and a rename keeps the
/// entry at its position, so listings are deterministic across a session.
/// Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    inner: Arc<Mutex<MemoryTree>>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryTree {
    pub(crate) dirs: BTreeMap<PathBuf, Vec<String>>,
    pub(crate) mutations: usize,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryFs::add_dir`].
    pub fn with_dir<I, S>(self, dir: impl AsRef<Path>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_dir(dir, names);
        self
    }

    /// Create (or replace) a folder holding the given entries.
    pub fn add_dir<I, S>(&self, dir: impl AsRef<Path>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.lock().dirs.insert(normalize_dir(dir.as_ref()), names);
    }

    /// Current entries of a folder, or `None` when it does not exist.
    pub fn entries(&self, dir: impl AsRef<Path>) -> Option<Vec<String>> {
        self.lock().dirs.get(&normalize_dir(dir.as_ref())).cloned()
    }

    /// Number of renames applied so far.
    pub fn mutations(&self) -> usize {
        self.lock().mutations
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, MemoryTree> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
