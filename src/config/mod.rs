pub mod loader;
pub mod settings;

pub use loader::{SettingsRequest, resolve};
pub use settings::RenameSettings;
