use crate::config::RenameSettings;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SEQRENAME_CONFIG";
pub const START_INDEX_ENV: &str = "SEQRENAME_START_INDEX";
pub const SORT_ENV: &str = "SEQRENAME_SORT";

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Command-line inputs that take part in settings resolution
#[derive(Debug, Clone, Default)]
pub struct SettingsRequest {
    pub config_path: Option<PathBuf>,
    pub start_index: Option<u64>,
    pub sort_entries: bool,
}

/// Resolve settings: file, then environment overrides, then flags.
pub fn resolve(request: SettingsRequest) -> Result<RenameSettings> {
    resolve_from_source(request, &env_value)
}

fn resolve_from_source(
    request: SettingsRequest,
    get: &dyn Fn(&str) -> Option<String>,
) -> Result<RenameSettings> {
    let (path, required) = match request.config_path.clone() {
        Some(path) => (path, true),
        None => match get(CONFIG_ENV) {
            Some(path) => (PathBuf::from(path), true),
            None => (default_settings_path(), false),
        },
    };

    let mut settings = match load_settings_file(&path, required)? {
        Some(settings) => settings,
        None => {
            debug!("no settings file at {}, using defaults", path.display());
            RenameSettings::default()
        }
    };

    apply_env_overrides(&mut settings, get)?;

    if let Some(start_index) = request.start_index {
        settings.start_index = start_index;
    }
    if request.sort_entries {
        settings.sort_entries = true;
    }

    settings.validate()?;
    Ok(settings)
}

/// Read a settings file. A missing file is `None` unless it was asked for
/// explicitly.
pub fn load_settings_file(path: &Path, required: bool) -> Result<Option<RenameSettings>> {
    if path.is_dir() {
        return Err(Error::SettingsIo {
            path: path.to_path_buf(),
            source: std::io::Error::other("settings path points to a directory"),
        });
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => return Ok(None),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(Error::SettingsIo {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let settings = toml::from_str(&raw).map_err(|source| Error::SettingsParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(settings))
}

fn apply_env_overrides(
    settings: &mut RenameSettings,
    get: &dyn Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(raw) = get(START_INDEX_ENV) {
        settings.start_index = raw.parse().map_err(|_| Error::InvalidArgument {
            message: format!("{START_INDEX_ENV} must be a non-negative integer, got '{raw}'"),
        })?;
    }
    if let Some(raw) = get(SORT_ENV) {
        settings.sort_entries = parse_flag(SORT_ENV, &raw)?;
    }
    Ok(())
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidArgument {
            message: format!("{key} must be a boolean (true/false), got '{raw}'"),
        }),
    }
}

/// Get default settings path
fn default_settings_path() -> PathBuf {
    directories::BaseDirs::new()
        .map(|base_dirs| {
            base_dirs
                .home_dir()
                .join(".config")
                .join("seqrename")
                .join("config.toml")
        })
        .unwrap_or_else(|| {
            warn!("home directory not found, looking for settings in the current directory");
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("seqrename.toml")
        })
}
