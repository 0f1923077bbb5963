//! Inicialización de `tracing` para los binarios de Cadence.
//!
//! Las librerías sólo emiten eventos con `tracing`; el subscriber lo instala
//! quien arranca el proceso, normalmente con la sección `[logging]` de
//! `cadence.toml`:
//!
//! ```toml
//! [logging]
//! filter = "cadence_core=debug,cadence_storage=info"
//! format = "json"
//! display_target = true
//! ```
//!
//! `RUST_LOG`, si está definido, tiene prioridad sobre `filter`.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::{ConfigBackend, TomlConfigBackend};
use crate::paths::ConfigError;
use crate::CONFIG_BACKEND;

const DEFAULT_FILTER: &str = "cadence_core=info,cadence_storage=info,cadence_config=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  Pretty,
  #[default]
  Compact,
  Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
  /// Directivas de `EnvFilter` (p. ej. `"cadence_core=debug"`).
  #[serde(default = "default_filter")]
  pub filter: String,

  #[serde(default)]
  pub format: LogFormat,

  /// Mostrar el módulo de origen en cada línea.
  #[serde(default)]
  pub display_target: bool,
}

fn default_filter() -> String {
  DEFAULT_FILTER.to_string()
}

impl Default for LoggingConfig {
  fn default() -> Self {
    LoggingConfig { filter: default_filter(), format: LogFormat::default(), display_target: false }
  }
}

impl LoggingConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default("logging")?;
    backend.save_section("logging", &cfg)?;
    Ok(cfg)
  }

  pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
    self.filter = filter.into();
    self
  }

  pub fn with_format(mut self, format: LogFormat) -> Self {
    self.format = format;
    self
  }

  fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
    match EnvFilter::try_from_default_env() {
      Ok(filter) => Ok(filter),
      Err(_) => self.configured_filter(),
    }
  }

  fn configured_filter(&self) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(&self.filter)
      .map_err(|e| ConfigError::Other(format!("invalid log filter {:?}: {e}", self.filter)))
  }
}

/// Instala el subscriber global. Una segunda llamada devuelve error.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
  let filter = config.env_filter()?;
  let registry = tracing_subscriber::registry().with(filter);
  let fmt_layer = tracing_subscriber::fmt::layer().with_target(config.display_target);

  let result = match config.format {
    LogFormat::Pretty => registry.with(fmt_layer.pretty()).try_init(),
    LogFormat::Compact => registry.with(fmt_layer.compact()).try_init(),
    LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
  };

  result.map_err(|e| ConfigError::Other(format!("failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::paths::CadencePaths;
  use tempfile::tempdir;

  #[test]
  fn parses_partial_section_with_defaults() {
    let cfg: LoggingConfig = toml::from_str("format = \"json\"").unwrap();
    assert_eq!(cfg.format, LogFormat::Json);
    assert_eq!(cfg.filter, DEFAULT_FILTER);
    assert!(!cfg.display_target);
  }

  #[test]
  fn load_writes_back_defaults() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(CadencePaths::from_base(tmp.path()).unwrap());

    let cfg = LoggingConfig::load_from(&backend).unwrap();
    assert_eq!(cfg, LoggingConfig::default());

    let raw = std::fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(raw.contains("[logging]"));
    assert!(raw.contains("format = \"compact\""));
  }

  #[test]
  fn rejects_invalid_filter() {
    let cfg = LoggingConfig::default().with_filter("cadence_core=loud");
    let err = cfg.configured_filter().unwrap_err();
    assert!(matches!(err, ConfigError::Other(ref m) if m.contains("invalid log filter")));

    assert!(LoggingConfig::default().configured_filter().is_ok());
  }
}
