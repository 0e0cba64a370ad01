//! Global subscriber installation, kept in its own test binary

use multisum::{init_logging, Config, LogOutput, LoggingConfig};

#[test]
fn test_init_logging_only_once() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        output: LogOutput::Stderr,
    };
    assert!(init_logging(&config).is_ok());
    tracing::warn!("logging initialized");

    let err = init_logging(&Config::default().logging).unwrap_err();
    assert!(err.to_string().contains("Failed to initialize tracing subscriber"));
}
