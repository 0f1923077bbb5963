use std::sync::{Arc, Mutex};

use cadence_core::domain::{Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Song, SongId, User, UserId};
use cadence_core::ports::{RepoError, StreamingRepository};

/// Repositorio compartible entre hilos.
///
/// Un único `Mutex` serializa todas las operaciones sobre el repositorio
/// envuelto; los clones comparten el mismo estado.
pub struct SharedRepository<R> {
  inner: Arc<Mutex<R>>,
}

impl<R> Clone for SharedRepository<R> {
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner) }
  }
}

impl<R: StreamingRepository> SharedRepository<R> {
  pub fn new(repo: R) -> Self {
    Self { inner: Arc::new(Mutex::new(repo)) }
  }

  /// Ejecuta `f` con el repositorio bloqueado.
  pub fn with<T>(&self, f: impl FnOnce(&mut R) -> Result<T, RepoError>) -> Result<T, RepoError> {
    let mut guard =
      self.inner.lock().map_err(|_| RepoError::Storage("repository mutex poisoned".to_string()))?;
    f(&mut *guard)
  }
}

impl<R: StreamingRepository> StreamingRepository for SharedRepository<R> {
  fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, RepoError> {
    self.with(|repo| repo.create_user(name, mobile))
  }

  fn create_artist(&mut self, name: &str) -> Result<Artist, RepoError> {
    self.with(|repo| repo.create_artist(name))
  }

  fn create_album(&mut self, title: &str, artist_name: &str) -> Result<Album, RepoError> {
    self.with(|repo| repo.create_album(title, artist_name))
  }

  fn create_song(&mut self, title: &str, album_title: &str, length: u32) -> Result<Song, RepoError> {
    self.with(|repo| repo.create_song(title, album_title, length))
  }

  fn create_playlist_on_length(
    &mut self,
    mobile: &str,
    title: &str,
    length: u32,
  ) -> Result<Playlist, RepoError> {
    self.with(|repo| repo.create_playlist_on_length(mobile, title, length))
  }

  fn create_playlist_on_name(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: &[&str],
  ) -> Result<Playlist, RepoError> {
    self.with(|repo| repo.create_playlist_on_name(mobile, title, song_titles))
  }

  fn find_playlist(&mut self, mobile: &str, playlist_title: &str) -> Result<Playlist, RepoError> {
    self.with(|repo| repo.find_playlist(mobile, playlist_title))
  }

  fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, RepoError> {
    self.with(|repo| repo.like_song(mobile, song_title))
  }

  fn most_popular_artist(&self) -> Result<Option<String>, RepoError> {
    self.with(|repo| repo.most_popular_artist())
  }

  fn most_popular_song(&self) -> Result<Option<String>, RepoError> {
    self.with(|repo| repo.most_popular_song())
  }

  fn users(&self) -> Result<Vec<User>, RepoError> {
    self.with(|repo| repo.users())
  }

  fn artists(&self) -> Result<Vec<Artist>, RepoError> {
    self.with(|repo| repo.artists())
  }

  fn albums(&self) -> Result<Vec<Album>, RepoError> {
    self.with(|repo| repo.albums())
  }

  fn songs(&self) -> Result<Vec<Song>, RepoError> {
    self.with(|repo| repo.songs())
  }

  fn playlists(&self) -> Result<Vec<Playlist>, RepoError> {
    self.with(|repo| repo.playlists())
  }

  fn albums_of(&self, artist: ArtistId) -> Result<Vec<AlbumId>, RepoError> {
    self.with(|repo| repo.albums_of(artist))
  }

  fn songs_of_album(&self, album: AlbumId) -> Result<Vec<SongId>, RepoError> {
    self.with(|repo| repo.songs_of_album(album))
  }

  fn songs_of_playlist(&self, playlist: PlaylistId) -> Result<Vec<SongId>, RepoError> {
    self.with(|repo| repo.songs_of_playlist(playlist))
  }

  fn listeners_of(&self, playlist: PlaylistId) -> Result<Vec<UserId>, RepoError> {
    self.with(|repo| repo.listeners_of(playlist))
  }

  fn likers_of(&self, song: SongId) -> Result<Vec<UserId>, RepoError> {
    self.with(|repo| repo.likers_of(song))
  }

  fn created_playlist_of(&self, user: UserId) -> Result<Option<PlaylistId>, RepoError> {
    self.with(|repo| repo.created_playlist_of(user))
  }

  fn artist_of_song(&self, song: SongId) -> Result<Option<ArtistId>, RepoError> {
    self.with(|repo| repo.artist_of_song(song))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::InMemoryRepository;
  use cadence_core::domain::EntityKind;

  #[test]
  fn clones_share_state() {
    let mut a = SharedRepository::new(InMemoryRepository::new());
    let mut b = a.clone();

    a.create_user("Alice", "111").unwrap();
    b.create_album("Al", "A").unwrap();

    assert_eq!(b.users().unwrap().len(), 1);
    assert_eq!(a.artists().unwrap().len(), 1);
    assert!(matches!(b.create_song("S", "Nope", 1), Err(RepoError::NotFound(EntityKind::Album))));
  }

  #[test]
  fn poisoned_lock_is_reported_as_storage_error() {
    let repo = SharedRepository::new(InMemoryRepository::new());
    let poisoner = repo.clone();

    let joined = std::thread::spawn(move || {
      let _guard = poisoner.inner.lock().unwrap();
      panic!("poison the repository lock");
    })
    .join();
    assert!(joined.is_err());

    let err = repo.users().unwrap_err();
    assert!(matches!(err, RepoError::Storage(ref m) if m == "repository mutex poisoned"));
  }
}
