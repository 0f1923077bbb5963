use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declara un identificador opaco respaldado por un UUID v4.
///
/// La identidad de cada entidad es su id, nunca un nombre o título:
/// dos artistas con el mismo nombre son entidades distintas.
macro_rules! entity_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct $name(Uuid);

    impl $name {
      /// Genera un nuevo identificador único.
      pub fn new() -> Self {
        $name(Uuid::new_v4())
      }

      /// Construye el id a partir de un `Uuid` existente.
      pub fn from_uuid(u: Uuid) -> Self {
        $name(u)
      }

      /// Devuelve el `Uuid` interno.
      pub fn as_uuid(&self) -> Uuid {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(u: Uuid) -> Self {
        $name(u)
      }
    }

    impl From<$name> for Uuid {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

entity_id!(
  /// Identificador de un usuario de la plataforma.
  UserId
);

entity_id!(
  /// Identificador de un artista.
  ArtistId
);

entity_id!(
  /// Identificador de un álbum.
  AlbumId
);

entity_id!(
  /// Identificador de una canción.
  SongId
);

entity_id!(
  /// Identificador de una playlist.
  PlaylistId
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_are_unique_and_roundtrip_through_uuid() {
    let a = SongId::new();
    let b = SongId::new();
    assert_ne!(a, b);

    let raw: Uuid = a.into();
    assert_eq!(SongId::from_uuid(raw), a);
    assert_eq!(a.to_string(), raw.to_string());
  }
}
