pub mod streaming_service;

pub use streaming_service::StreamingService;
