use cadence_config::{ConfigError, LoggingConfig, init_logging};

// El dispatcher global es único por proceso: este binario sólo tiene este test.
#[test]
fn second_init_returns_error_instead_of_panicking() {
  unsafe { std::env::remove_var("RUST_LOG") };
  let cfg = LoggingConfig::default();

  assert!(init_logging(&cfg).is_ok());
  tracing::info!("logging initialized");

  let err = init_logging(&cfg).unwrap_err();
  assert!(matches!(err, ConfigError::Other(ref m) if m.starts_with("failed to initialize logging")));
}
