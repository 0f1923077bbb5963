use tracing::{debug, info, instrument, warn};

use crate::domain::{Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Song, SongId, User, UserId};
use crate::errors::CoreError;
use crate::ports::{RepoError, StreamingRepository};

/// Punto de entrada del núcleo para la capa de API.
///
/// Envuelve un [`StreamingRepository`], traduce sus errores a [`CoreError`]
/// y deja trazas de cada operación.
pub struct StreamingService<R>
where
  R: StreamingRepository,
{
  repo: R,
}

impl<R> StreamingService<R>
where
  R: StreamingRepository,
{
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  pub fn repository(&self) -> &R {
    &self.repo
  }

  pub fn into_inner(self) -> R {
    self.repo
  }

  // -------- COMMAND (write) --------

  #[instrument(skip(self))]
  pub fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, CoreError> {
    let user = self.repo.create_user(name, mobile).map_err(log_failure)?;
    info!(user_id = %user.id, "user created");
    Ok(user)
  }

  #[instrument(skip(self))]
  pub fn create_artist(&mut self, name: &str) -> Result<Artist, CoreError> {
    let artist = self.repo.create_artist(name).map_err(log_failure)?;
    info!(artist_id = %artist.id, "artist created");
    Ok(artist)
  }

  #[instrument(skip(self))]
  pub fn create_album(&mut self, title: &str, artist_name: &str) -> Result<Album, CoreError> {
    let album = self.repo.create_album(title, artist_name).map_err(log_failure)?;
    info!(album_id = %album.id, "album created");
    Ok(album)
  }

  #[instrument(skip(self))]
  pub fn create_song(&mut self, title: &str, album_title: &str, length: u32) -> Result<Song, CoreError> {
    let song = self.repo.create_song(title, album_title, length).map_err(log_failure)?;
    info!(song_id = %song.id, "song created");
    Ok(song)
  }

  #[instrument(skip(self))]
  pub fn create_playlist_on_length(
    &mut self,
    mobile: &str,
    title: &str,
    length: u32,
  ) -> Result<Playlist, CoreError> {
    let playlist = self.repo.create_playlist_on_length(mobile, title, length).map_err(log_failure)?;
    let songs = self.repo.songs_of_playlist(playlist.id).map_err(log_failure)?.len();
    info!(playlist_id = %playlist.id, songs, "playlist created by length");
    Ok(playlist)
  }

  #[instrument(skip(self, song_titles), fields(requested = tracing::field::Empty))]
  pub fn create_playlist_on_name<I, S>(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: I,
  ) -> Result<Playlist, CoreError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let owned: Vec<S> = song_titles.into_iter().collect();
    let titles: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();
    tracing::Span::current().record("requested", titles.len());

    let playlist = self.repo.create_playlist_on_name(mobile, title, &titles).map_err(log_failure)?;
    let songs = self.repo.songs_of_playlist(playlist.id).map_err(log_failure)?.len();
    if songs < titles.len() {
      debug!(skipped = titles.len() - songs, "unknown song titles skipped");
    }
    info!(playlist_id = %playlist.id, songs, "playlist created by name");
    Ok(playlist)
  }

  #[instrument(skip(self))]
  pub fn find_playlist(&mut self, mobile: &str, playlist_title: &str) -> Result<Playlist, CoreError> {
    let playlist = self.repo.find_playlist(mobile, playlist_title).map_err(log_failure)?;
    debug!(playlist_id = %playlist.id, "playlist found");
    Ok(playlist)
  }

  #[instrument(skip(self))]
  pub fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, CoreError> {
    let song = self.repo.like_song(mobile, song_title).map_err(log_failure)?;
    info!(song_id = %song.id, likes = song.likes, "like processed");
    Ok(song)
  }

  // -------- QUERY (read) --------

  pub fn most_popular_artist(&self) -> Result<Option<String>, CoreError> {
    Ok(self.repo.most_popular_artist().map_err(log_failure)?)
  }

  pub fn most_popular_song(&self) -> Result<Option<String>, CoreError> {
    Ok(self.repo.most_popular_song().map_err(log_failure)?)
  }

  pub fn list_users(&self) -> Result<Vec<User>, CoreError> {
    Ok(self.repo.users().map_err(log_failure)?)
  }

  pub fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    Ok(self.repo.artists().map_err(log_failure)?)
  }

  pub fn list_albums(&self) -> Result<Vec<Album>, CoreError> {
    Ok(self.repo.albums().map_err(log_failure)?)
  }

  pub fn list_songs(&self) -> Result<Vec<Song>, CoreError> {
    Ok(self.repo.songs().map_err(log_failure)?)
  }

  pub fn list_playlists(&self) -> Result<Vec<Playlist>, CoreError> {
    Ok(self.repo.playlists().map_err(log_failure)?)
  }

  pub fn albums_of(&self, artist: ArtistId) -> Result<Vec<AlbumId>, CoreError> {
    Ok(self.repo.albums_of(artist).map_err(log_failure)?)
  }

  pub fn songs_of_album(&self, album: AlbumId) -> Result<Vec<SongId>, CoreError> {
    Ok(self.repo.songs_of_album(album).map_err(log_failure)?)
  }

  pub fn songs_of_playlist(&self, playlist: PlaylistId) -> Result<Vec<SongId>, CoreError> {
    Ok(self.repo.songs_of_playlist(playlist).map_err(log_failure)?)
  }

  pub fn listeners_of(&self, playlist: PlaylistId) -> Result<Vec<UserId>, CoreError> {
    Ok(self.repo.listeners_of(playlist).map_err(log_failure)?)
  }

  pub fn likers_of(&self, song: SongId) -> Result<Vec<UserId>, CoreError> {
    Ok(self.repo.likers_of(song).map_err(log_failure)?)
  }

  pub fn created_playlist_of(&self, user: UserId) -> Result<Option<PlaylistId>, CoreError> {
    Ok(self.repo.created_playlist_of(user).map_err(log_failure)?)
  }

  pub fn artist_of_song(&self, song: SongId) -> Result<Option<ArtistId>, CoreError> {
    Ok(self.repo.artist_of_song(song).map_err(log_failure)?)
  }
}

fn log_failure(err: RepoError) -> CoreError {
  match &err {
    RepoError::NotFound(kind) => warn!(entity = %kind, "lookup failed"),
    RepoError::Storage(msg) => warn!(error = %msg, "repository failure"),
  }
  err.into()
}
