use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo de entidad, usado para informar qué no se encontró.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
  User,
  Artist,
  Album,
  Song,
  Playlist,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      EntityKind::User => "user",
      EntityKind::Artist => "artist",
      EntityKind::Album => "album",
      EntityKind::Song => "song",
      EntityKind::Playlist => "playlist",
    };
    write!(f, "{}", text)
  }
}
