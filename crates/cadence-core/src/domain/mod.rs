pub mod album;
pub mod artist;
pub mod entity_kind;
pub mod ids;
pub mod playlist;
pub mod song;
pub mod user;

pub use album::Album;
pub use artist::Artist;
pub use entity_kind::EntityKind;
pub use ids::{AlbumId, ArtistId, PlaylistId, SongId, UserId};
pub use playlist::Playlist;
pub use song::Song;
pub use user::User;
