use crate::domain::{Album, AlbumId, Artist, ArtistId, EntityKind, Playlist, PlaylistId, Song, SongId, User, UserId};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("{0} not found")]
  NotFound(EntityKind),
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port del repositorio de streaming.
///
/// Todas las búsquedas por nombre, título o móvil recorren las entidades en
/// orden de creación y se quedan con la primera coincidencia. Las relaciones
/// se guardan en tablas de asociación `id -> [ids]`, nunca dentro de las
/// entidades.
///
/// Las operaciones de escritura piden `&mut self`: el repositorio no tiene
/// control de concurrencia propio.
pub trait StreamingRepository {
  // --- Creación ---
  fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, RepoError>;
  fn create_artist(&mut self, name: &str) -> Result<Artist, RepoError>;

  /// Crea el álbum bajo el primer artista llamado `artist_name`, creando
  /// el artista si no existe.
  fn create_album(&mut self, title: &str, artist_name: &str) -> Result<Album, RepoError>;

  /// Falla con `NotFound(Album)` si no hay ningún álbum con ese título.
  fn create_song(&mut self, title: &str, album_title: &str, length: u32) -> Result<Song, RepoError>;

  /// Playlist con todas las canciones existentes de duración exactamente `length`.
  fn create_playlist_on_length(
    &mut self,
    mobile: &str,
    title: &str,
    length: u32,
  ) -> Result<Playlist, RepoError>;

  /// Playlist con la primera canción de cada título pedido. Los títulos
  /// desconocidos se ignoran.
  fn create_playlist_on_name(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: &[&str],
  ) -> Result<Playlist, RepoError>;

  // --- Interacción ---

  /// Busca la playlist y registra al usuario como oyente si no lo era.
  fn find_playlist(&mut self, mobile: &str, playlist_title: &str) -> Result<Playlist, RepoError>;

  /// Like idempotente por par (usuario, canción).
  fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, RepoError>;

  fn most_popular_artist(&self) -> Result<Option<String>, RepoError>;
  fn most_popular_song(&self) -> Result<Option<String>, RepoError>;

  // --- Consultas de listado ---
  fn users(&self) -> Result<Vec<User>, RepoError>;
  fn artists(&self) -> Result<Vec<Artist>, RepoError>;
  fn albums(&self) -> Result<Vec<Album>, RepoError>;
  fn songs(&self) -> Result<Vec<Song>, RepoError>;
  fn playlists(&self) -> Result<Vec<Playlist>, RepoError>;

  // --- Consultas de relaciones ---
  fn albums_of(&self, artist: ArtistId) -> Result<Vec<AlbumId>, RepoError>;
  fn songs_of_album(&self, album: AlbumId) -> Result<Vec<SongId>, RepoError>;
  fn songs_of_playlist(&self, playlist: PlaylistId) -> Result<Vec<SongId>, RepoError>;
  fn listeners_of(&self, playlist: PlaylistId) -> Result<Vec<UserId>, RepoError>;
  fn likers_of(&self, song: SongId) -> Result<Vec<UserId>, RepoError>;

  /// Última playlist creada por el usuario. Una segunda creación sobrescribe
  /// la entrada anterior.
  fn created_playlist_of(&self, user: UserId) -> Result<Option<PlaylistId>, RepoError>;

  /// Artista dueño de la canción, a través de su álbum.
  fn artist_of_song(&self, song: SongId) -> Result<Option<ArtistId>, RepoError>;
}
