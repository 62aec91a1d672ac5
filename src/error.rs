use snafu::Snafu;
use std::path::PathBuf;
use toml::de::Error as TomlDeError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Path not found: {}", path.display()))]
    PathNotFound { path: PathBuf },

    #[snafu(display("Failed to list directory '{path}': {source}"))]
    ListDirectoryFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to check whether '{path}' exists: {source}"))]
    StatFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to rename '{src_path}' to '{dest_path}': {source}"))]
    RenameFailed {
        src_path: String,
        dest_path: String,
        source: Box<Error>,
    },

    #[snafu(display(
        "Refusing to rename '{src_path}' to '{dest_path}': destination already exists"
    ))]
    RenameTargetExists { src_path: String, dest_path: String },

    #[snafu(display("Input closed while waiting for '{field}'"))]
    InputClosed { field: String },

    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("Failed to read settings '{}': {source}", path.display()))]
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse settings '{}': {source}", path.display()))]
    SettingsParse { path: PathBuf, source: TomlDeError },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl Error {
    pub fn non_interactive(field: &str, flag: &str) -> Self {
        Error::InvalidArgument {
            message: format!(
                "'{field}' requires interactive input. Hint: rerun without --non-interactive or supply {flag}."
            ),
        }
    }
}
