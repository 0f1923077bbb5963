// crates/cadence-core/src/errors.rs
use thiserror::Error;

use crate::domain::EntityKind;
use crate::ports::RepoError;

/// Error genérico del núcleo de Cadence.
///
/// Las capas superiores (API HTTP, CLI, etc.) deberían mapear este error
/// a respuestas de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("{0} not found")]
  NotFound(EntityKind),

  #[error("repository error: {0}")]
  Repository(String),

  #[error("config error: {0}")]
  Config(String),
}

impl From<RepoError> for CoreError {
  fn from(err: RepoError) -> Self {
    match err {
      RepoError::NotFound(kind) => CoreError::NotFound(kind),
      RepoError::Storage(msg) => CoreError::Repository(msg),
    }
  }
}

impl CoreError {
  /// Devuelve el tipo de entidad si el error es un "no encontrado".
  pub fn missing_entity(&self) -> Option<EntityKind> {
    match self {
      CoreError::NotFound(kind) => Some(*kind),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repo_errors_map_onto_core_errors() {
    let not_found: CoreError = RepoError::NotFound(EntityKind::Album).into();
    assert_eq!(not_found.missing_entity(), Some(EntityKind::Album));
    assert_eq!(not_found.to_string(), "album not found");

    let storage: CoreError = RepoError::Storage("boom".into()).into();
    assert!(matches!(storage, CoreError::Repository(ref m) if m == "boom"));
    assert_eq!(storage.missing_entity(), None);
  }
}
