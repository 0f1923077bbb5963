use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Representa a un artista dentro del sistema.
///
/// Los álbumes del artista no se guardan aquí: la relación vive en la
/// tabla de asociación `artista -> álbumes` del repositorio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre del artista. No es único.
  pub name: String,

  /// Likes acumulados a través de las canciones de sus álbumes.
  pub likes: u32,
}

impl Artist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: ArtistId::new(), name: name.into(), likes: 0 }
  }
}
