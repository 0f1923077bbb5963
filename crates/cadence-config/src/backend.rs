use crate::io::atomic_write_str;
use crate::paths::{CadencePaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

// toml_edit para escribir preservando comentarios del usuario
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: CadencePaths,
}

impl TomlConfigBackend {
  pub fn new(paths: CadencePaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &CadencePaths {
    &self.paths
  }

  /// Igual que [`ConfigBackend::load_section`], pero un archivo o sección
  /// ausente devuelve `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // La sección serializada llega sin cabecera ("foo = 1\nbar = 2\n"),
    // así que se reinterpreta como documento y se cuelga de la raíz.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;
    tracing::debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    verbose: bool,
  }

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(CadencePaths::from_base(dir).unwrap())
  }

  #[test]
  fn missing_file_or_section_falls_back_to_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let sample: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(sample, Sample::default());

    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();
    let sample: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(sample, Sample::default());
  }

  #[test]
  fn strict_load_reports_missing_section() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();

    let err = backend.load_section::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Other(ref m) if m.contains("missing section [sample]")));
  }

  #[test]
  fn save_then_load_keeps_other_sections_and_comments() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::write(backend.paths().config_file(), "# mantener\n[other]\nx = 1\n").unwrap();

    let sample = Sample { name: "cadence".into(), verbose: true };
    backend.save_section("sample", &sample).unwrap();

    let loaded: Sample = backend.load_section("sample").unwrap();
    assert_eq!(loaded, sample);

    let raw = fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(raw.contains("# mantener"));
    assert!(raw.contains("[other]"));
  }
}
