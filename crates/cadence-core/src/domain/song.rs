use crate::domain::ids::SongId;
use serde::{Deserialize, Serialize};

/// La canción dentro de un álbum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único de la canción dentro del sistema.
  pub id: SongId,
  /// El título de la canción.
  pub title: String,
  /// Duración, en las unidades que use la capa que crea la canción.
  pub length: u32,
  /// Número de usuarios distintos que le han dado like.
  pub likes: u32,
}

impl Song {
  pub fn new(title: impl Into<String>, length: u32) -> Self {
    Self { id: SongId::new(), title: title.into(), length, likes: 0 }
  }
}
