pub mod config;
pub mod memory;
pub mod shared;

pub use config::{ArtistLookup, StorageConfig};
pub use memory::InMemoryRepository;
pub use shared::SharedRepository;
