// Path helper utilities shared across storage operations
use std::path::{Component, Path, PathBuf};

/// Build the path of an entry by joining the folder and the entry name.
pub fn build_entry_path(folder: &str, name: impl AsRef<Path>) -> PathBuf {
    Path::new(folder).join(name)
}

/// Lossy display string used in console output and error messages.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Drop `.` components and trailing separators so equal folders compare equal.
pub fn normalize_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Split a path into its normalized parent folder and its final name.
pub fn split_entry_path(path: &Path) -> Option<(PathBuf, String)> {
    let name = path.file_name()?.to_str()?.to_string();
    let parent = path.parent().map(normalize_dir).unwrap_or_default();
    Some((parent, name))
}
