use std::collections::HashMap;

use cadence_core::domain::{
  Album, AlbumId, Artist, ArtistId, EntityKind, Playlist, PlaylistId, Song, SongId, User, UserId,
};
use cadence_core::ports::{RepoError, StreamingRepository};
use tracing::debug;

use crate::config::{ArtistLookup, StorageConfig};

/// Índices inversos que evitan recorrer las tablas al resolver el artista
/// de una canción. Se rellenan al crear álbumes y canciones.
#[derive(Debug, Default)]
struct ReverseIndex {
  song_album: HashMap<SongId, AlbumId>,
  album_artist: HashMap<AlbumId, ArtistId>,
}

/// Repositorio en memoria.
///
/// Las entidades se guardan en vectores en orden de creación y las
/// relaciones en tablas de asociación por id. No hay persistencia ni
/// índices por nombre: toda búsqueda es lineal y gana la primera
/// coincidencia.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
  users: Vec<User>,
  artists: Vec<Artist>,
  albums: Vec<Album>,
  songs: Vec<Song>,
  playlists: Vec<Playlist>,

  artist_albums: HashMap<ArtistId, Vec<AlbumId>>,
  album_songs: HashMap<AlbumId, Vec<SongId>>,
  playlist_songs: HashMap<PlaylistId, Vec<SongId>>,
  playlist_listeners: HashMap<PlaylistId, Vec<UserId>>,
  creator_playlist: HashMap<UserId, PlaylistId>,
  song_likes: HashMap<SongId, Vec<UserId>>,

  // `None` = estrategia Scan
  reverse: Option<ReverseIndex>,
}

impl InMemoryRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_lookup(lookup: ArtistLookup) -> Self {
    let reverse = match lookup {
      ArtistLookup::Scan => None,
      ArtistLookup::Indexed => Some(ReverseIndex::default()),
    };
    Self { reverse, ..Self::default() }
  }

  pub fn from_config(cfg: &StorageConfig) -> Self {
    Self::with_lookup(cfg.artist_lookup)
  }

  pub fn lookup(&self) -> ArtistLookup {
    if self.reverse.is_some() { ArtistLookup::Indexed } else { ArtistLookup::Scan }
  }

  fn user_by_mobile(&self, mobile: &str) -> Result<UserId, RepoError> {
    self
      .users
      .iter()
      .find(|u| u.mobile == mobile)
      .map(|u| u.id)
      .ok_or(RepoError::NotFound(EntityKind::User))
  }

  fn artist_by_name(&self, name: &str) -> Option<ArtistId> {
    self.artists.iter().find(|a| a.name == name).map(|a| a.id)
  }

  fn album_by_title(&self, title: &str) -> Option<AlbumId> {
    self.albums.iter().find(|a| a.title == title).map(|a| a.id)
  }

  fn song_position(&self, title: &str) -> Option<usize> {
    self.songs.iter().position(|s| s.title == title)
  }

  fn scan_artist_of(&self, song: SongId) -> Option<ArtistId> {
    let album = self.album_songs.iter().find(|(_, songs)| songs.contains(&song)).map(|(album, _)| *album)?;
    self
      .artist_albums
      .iter()
      .find(|(_, albums)| albums.contains(&album))
      .map(|(artist, _)| *artist)
  }

  fn register_playlist(&mut self, creator: UserId, playlist: &Playlist, songs: Vec<SongId>) {
    self.playlists.push(playlist.clone());
    self.playlist_songs.insert(playlist.id, songs);
    self.playlist_listeners.insert(playlist.id, vec![creator]);

    if let Some(previous) = self.creator_playlist.insert(creator, playlist.id) {
      debug!(user_id = %creator, %previous, "creator playlist entry overwritten");
    }
  }
}

/// Nombre de la primera entidad con el máximo estricto de likes.
fn first_max<'a>(entries: impl Iterator<Item = (&'a str, u32)>) -> Option<String> {
  let mut best: Option<(&str, u32)> = None;
  for (name, likes) in entries {
    match best {
      Some((_, max)) if likes <= max => {}
      _ => best = Some((name, likes)),
    }
  }
  best.map(|(name, _)| name.to_string())
}

impl StreamingRepository for InMemoryRepository {
  fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, RepoError> {
    let user = User::new(name, mobile);
    self.users.push(user.clone());
    Ok(user)
  }

  fn create_artist(&mut self, name: &str) -> Result<Artist, RepoError> {
    let artist = Artist::new(name);
    self.artists.push(artist.clone());
    Ok(artist)
  }

  fn create_album(&mut self, title: &str, artist_name: &str) -> Result<Album, RepoError> {
    let artist = match self.artist_by_name(artist_name) {
      Some(id) => id,
      None => {
        debug!(artist_name, "artist created implicitly for album");
        self.create_artist(artist_name)?.id
      }
    };

    let album = Album::new(title);
    self.albums.push(album.clone());
    self.artist_albums.entry(artist).or_default().push(album.id);

    if let Some(index) = self.reverse.as_mut() {
      index.album_artist.insert(album.id, artist);
    }

    Ok(album)
  }

  fn create_song(&mut self, title: &str, album_title: &str, length: u32) -> Result<Song, RepoError> {
    let album = self.album_by_title(album_title).ok_or(RepoError::NotFound(EntityKind::Album))?;

    let song = Song::new(title, length);
    self.songs.push(song.clone());
    self.album_songs.entry(album).or_default().push(song.id);

    if let Some(index) = self.reverse.as_mut() {
      index.song_album.insert(song.id, album);
    }

    Ok(song)
  }

  fn create_playlist_on_length(
    &mut self,
    mobile: &str,
    title: &str,
    length: u32,
  ) -> Result<Playlist, RepoError> {
    let creator = self.user_by_mobile(mobile)?;

    let playlist = Playlist::new(title);
    let songs = self.songs.iter().filter(|s| s.length == length).map(|s| s.id).collect();
    self.register_playlist(creator, &playlist, songs);

    Ok(playlist)
  }

  fn create_playlist_on_name(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: &[&str],
  ) -> Result<Playlist, RepoError> {
    let creator = self.user_by_mobile(mobile)?;

    let playlist = Playlist::new(title);
    let songs = song_titles
      .iter()
      .filter_map(|wanted| self.song_position(wanted).map(|pos| self.songs[pos].id))
      .collect();
    self.register_playlist(creator, &playlist, songs);

    Ok(playlist)
  }

  fn find_playlist(&mut self, mobile: &str, playlist_title: &str) -> Result<Playlist, RepoError> {
    let user = self.user_by_mobile(mobile)?;
    let playlist = self
      .playlists
      .iter()
      .find(|p| p.title == playlist_title)
      .cloned()
      .ok_or(RepoError::NotFound(EntityKind::Playlist))?;

    let is_creator = self.creator_playlist.get(&user) == Some(&playlist.id);
    let listeners = self.playlist_listeners.entry(playlist.id).or_default();
    if !listeners.contains(&user) && !is_creator {
      listeners.push(user);
      debug!(playlist_id = %playlist.id, user_id = %user, "listener added");
    }

    Ok(playlist)
  }

  fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, RepoError> {
    let user = self.user_by_mobile(mobile)?;
    let pos = self.song_position(song_title).ok_or(RepoError::NotFound(EntityKind::Song))?;
    let song_id = self.songs[pos].id;

    let likers = self.song_likes.entry(song_id).or_default();
    if likers.contains(&user) {
      debug!(%song_id, user_id = %user, "song already liked");
      return Ok(self.songs[pos].clone());
    }
    likers.push(user);
    self.songs[pos].likes += 1;

    match self.artist_of_song(song_id)? {
      Some(artist_id) => {
        if let Some(artist) = self.artists.iter_mut().find(|a| a.id == artist_id) {
          artist.likes += 1;
        }
      }
      None => debug!(%song_id, "no owning artist for liked song"),
    }

    Ok(self.songs[pos].clone())
  }

  fn most_popular_artist(&self) -> Result<Option<String>, RepoError> {
    Ok(first_max(self.artists.iter().map(|a| (a.name.as_str(), a.likes))))
  }

  fn most_popular_song(&self) -> Result<Option<String>, RepoError> {
    Ok(first_max(self.songs.iter().map(|s| (s.title.as_str(), s.likes))))
  }

  fn users(&self) -> Result<Vec<User>, RepoError> {
    Ok(self.users.clone())
  }

  fn artists(&self) -> Result<Vec<Artist>, RepoError> {
    Ok(self.artists.clone())
  }

  fn albums(&self) -> Result<Vec<Album>, RepoError> {
    Ok(self.albums.clone())
  }

  fn songs(&self) -> Result<Vec<Song>, RepoError> {
    Ok(self.songs.clone())
  }

  fn playlists(&self) -> Result<Vec<Playlist>, RepoError> {
    Ok(self.playlists.clone())
  }

  fn albums_of(&self, artist: ArtistId) -> Result<Vec<AlbumId>, RepoError> {
    Ok(self.artist_albums.get(&artist).cloned().unwrap_or_default())
  }

  fn songs_of_album(&self, album: AlbumId) -> Result<Vec<SongId>, RepoError> {
    Ok(self.album_songs.get(&album).cloned().unwrap_or_default())
  }

  fn songs_of_playlist(&self, playlist: PlaylistId) -> Result<Vec<SongId>, RepoError> {
    Ok(self.playlist_songs.get(&playlist).cloned().unwrap_or_default())
  }

  fn listeners_of(&self, playlist: PlaylistId) -> Result<Vec<UserId>, RepoError> {
    Ok(self.playlist_listeners.get(&playlist).cloned().unwrap_or_default())
  }

  fn likers_of(&self, song: SongId) -> Result<Vec<UserId>, RepoError> {
    Ok(self.song_likes.get(&song).cloned().unwrap_or_default())
  }

  fn created_playlist_of(&self, user: UserId) -> Result<Option<PlaylistId>, RepoError> {
    Ok(self.creator_playlist.get(&user).copied())
  }

  fn artist_of_song(&self, song: SongId) -> Result<Option<ArtistId>, RepoError> {
    let artist = match &self.reverse {
      Some(index) => {
        index.song_album.get(&song).and_then(|album| index.album_artist.get(album)).copied()
      }
      None => self.scan_artist_of(song),
    };
    Ok(artist)
  }
}
