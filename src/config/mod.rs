//! Configuration: types, default paths, XML loading.
//! The config surface is read-only input to the core; workflows never write
//! settings back.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, ensure_default_config_exists, load_config};

/// Environment variable naming an explicit config file location.
pub const CONFIG_ENV: &str = "FILESMITH_CONFIG";
