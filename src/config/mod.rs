pub mod manager;
pub mod settings;

pub use manager::{ConfigFile, ConfigManager};
pub use settings::{excludes_from_env, Overrides, Settings};
