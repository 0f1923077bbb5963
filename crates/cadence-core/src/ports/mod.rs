pub mod streaming_repository;

pub use streaming_repository::{RepoError, StreamingRepository};
