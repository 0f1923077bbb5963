use crate::domain::ids::PlaylistId;
use serde::{Deserialize, Serialize};

/// Playlist creada por un usuario.
///
/// Sus canciones se fijan al crearla; lo único que crece después es la
/// lista de oyentes. Ambas relaciones viven en el repositorio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  pub id: PlaylistId,
  pub title: String,
}

impl Playlist {
  pub fn new(title: impl Into<String>) -> Self {
    Self { id: PlaylistId::new(), title: title.into() }
  }
}
