use cadence_config::{LogFormat, LoggingConfig, init_logging};
use cadence_core::services::StreamingService;
use cadence_storage::{InMemoryRepository, SharedRepository, StorageConfig};

fn main() {
  let logging = LoggingConfig::load().expect("failed to load logging config").with_format(LogFormat::Pretty);
  init_logging(&logging).expect("failed to init logging");

  let storage = StorageConfig::load().expect("failed to load storage config");
  let shared = SharedRepository::new(InMemoryRepository::from_config(&storage));
  let mut service = StreamingService::new(shared.clone());

  service.create_user("Alice", "111").expect("failed to create user");
  service.create_user("Bob", "222").expect("failed to create user");
  service.create_album("Al", "A").expect("failed to create album");
  for (title, length) in [("one", 180), ("two", 200), ("three", 180), ("four", 200), ("five", 180)] {
    service.create_song(title, "Al", length).expect("failed to create song");
  }

  let by_length = service.create_playlist_on_length("111", "Short", 180).expect("failed to create playlist");
  let by_name =
    service.create_playlist_on_name("111", "Picks", ["two", "missing"]).expect("failed to create playlist");

  println!("{} -> {} songs", by_length.title, service.songs_of_playlist(by_length.id).unwrap_or_default().len());
  println!("{} -> {} songs", by_name.title, service.songs_of_playlist(by_name.id).unwrap_or_default().len());

  // Bob accede dos veces desde otro hilo; sólo cuenta una.
  let mut other = StreamingService::new(shared);
  std::thread::spawn(move || {
    for _ in 0..2 {
      other.find_playlist("222", "Short").expect("failed to find playlist");
    }
  })
  .join()
  .expect("listener thread panicked");

  let listeners = service.listeners_of(by_length.id).expect("failed to list listeners");
  println!("Listeners of {}: {}", by_length.title, listeners.len());
}
