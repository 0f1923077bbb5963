mod backend;
mod io;
pub mod logging;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use paths::{BASE_DIR_ENV, CadencePaths, ConfigError};

use once_cell::sync::Lazy;

// Singleton de paths (portable / system)
pub static PATHS: Lazy<CadencePaths> =
  Lazy::new(|| CadencePaths::detect().expect("failed to init CadencePaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
