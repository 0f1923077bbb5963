use cadence_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};

/// Cómo se resuelve el artista dueño de una canción al darle like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistLookup {
  /// Recorre las tablas `álbum -> canciones` y `artista -> álbumes`.
  #[default]
  Scan,
  /// Mantiene índices inversos `canción -> álbum` y `álbum -> artista`.
  Indexed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
  #[serde(default)]
  pub artist_lookup: ArtistLookup,
}

impl StorageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default("storage")?;
    backend.save_section("storage", &cfg)?;
    Ok(cfg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cadence_config::CadencePaths;
  use tempfile::tempdir;

  #[test]
  fn defaults_to_scan_and_persists_section() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(CadencePaths::from_base(tmp.path()).unwrap());

    let cfg = StorageConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.artist_lookup, ArtistLookup::Scan);

    let raw = std::fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(raw.contains("artist_lookup = \"scan\""));
  }

  #[test]
  fn reads_indexed_lookup() {
    let cfg: StorageConfig = toml::from_str("artist_lookup = \"indexed\"").unwrap();
    assert_eq!(cfg.artist_lookup, ArtistLookup::Indexed);
  }
}
