use std::env;
use std::time::Duration;

use quiz_backend::config::{parse_log_format, Config, LogFormat};
use quiz_backend::error::Error;

#[test]
fn log_format_parsing() {
    assert_eq!(parse_log_format(None).unwrap(), LogFormat::Pretty);
    assert_eq!(parse_log_format(Some("json")).unwrap(), LogFormat::Json);
    assert_eq!(parse_log_format(Some(" pretty ")).unwrap(), LogFormat::Pretty);
    assert!(matches!(parse_log_format(Some("xml")), Err(Error::Config(_))));
}

// Environment variables are process-wide, so every env-driven case lives in
// this one test.
#[test]
fn config_from_env() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("PUBLIC_RPS", "25");
    env::set_var("CONTENT_PATH", "/tmp/corpus.json");
    env::remove_var("FEEDBACK_DWELL_MS");
    env::set_var("LOG_FORMAT", "json");

    let config = Config::from_env().expect("config");
    assert_eq!(config.server_address, "127.0.0.1:0");
    assert_eq!(config.public_rps, 25);
    assert_eq!(
        config.content_path.as_deref(),
        Some(std::path::Path::new("/tmp/corpus.json"))
    );
    assert_eq!(config.feedback_dwell, Duration::from_secs(2));
    assert_eq!(config.log_format, LogFormat::Json);

    env::set_var("FEEDBACK_DWELL_MS", "750");
    let config = Config::from_env().expect("config");
    assert_eq!(config.feedback_dwell, Duration::from_millis(750));

    env::set_var("FEEDBACK_DWELL_MS", "soon");
    assert!(matches!(
        Config::from_env(),
        Err(Error::Config(ref msg)) if msg.contains("FEEDBACK_DWELL_MS")
    ));
    env::remove_var("FEEDBACK_DWELL_MS");

    env::set_var("PUBLIC_RPS", "lots");
    assert!(matches!(
        Config::from_env(),
        Err(Error::Config(ref msg)) if msg.contains("PUBLIC_RPS")
    ));

    env::set_var("PUBLIC_RPS", "25");
    env::remove_var("SERVER_ADDRESS");
    assert!(matches!(
        Config::from_env(),
        Err(Error::Config(ref msg)) if msg.contains("SERVER_ADDRESS")
    ));
}
