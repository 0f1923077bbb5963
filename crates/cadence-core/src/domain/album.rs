use crate::domain::ids::AlbumId;
use serde::{Deserialize, Serialize};

/// Álbum publicado por un único artista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
  pub id: AlbumId,
  pub title: String,
}

impl Album {
  pub fn new(title: impl Into<String>) -> Self {
    Self { id: AlbumId::new(), title: title.into() }
  }
}
