use cadence_config::{LoggingConfig, init_logging};
use cadence_core::services::StreamingService;
use cadence_storage::{InMemoryRepository, StorageConfig};

fn main() {
  let logging = LoggingConfig::load().expect("failed to load logging config");
  init_logging(&logging).expect("failed to init logging");

  let storage = StorageConfig::load().expect("failed to load storage config");
  let mut service = StreamingService::new(InMemoryRepository::from_config(&storage));
  println!("Artist lookup strategy: {:?}", service.repository().lookup());

  service.create_user("Alice", "111").expect("failed to create user");
  service.create_album("Al", "A").expect("failed to create album");
  service.create_song("S", "Al", 200).expect("failed to create song");

  for attempt in 1..=2 {
    let song = service.like_song("111", "S").expect("failed to like song");
    let artist = &service.list_artists().expect("failed to list artists")[0];
    println!("Like #{attempt}: song likes = {}, artist likes = {}", song.likes, artist.likes);
  }

  println!("Most popular artist: {:?}", service.most_popular_artist().expect("query failed"));
  println!("Most popular song: {:?}", service.most_popular_song().expect("query failed"));

  match service.like_song("999", "S") {
    Ok(_) => println!("unexpected like from unknown user"),
    Err(e) => println!("Unknown user rejected: {e}"),
  }
}
