//! `tracing` events reach the process-wide facade once the bridge is installed.

use logshim::config::LEVEL_ENV;
use logshim::Config;

mod common;
use common::SharedBuffer;

#[test]
fn test_tracing_events_use_global_logger() {
    std::env::remove_var(LEVEL_ENV);
    logshim::install_tracing_bridge().expect("no subscriber installed yet");
    assert!(logshim::install_tracing_bridge().is_err());

    let buffer = SharedBuffer::default();
    logshim::init(
        Config {
            format: "text".into(),
            ..Config::default()
        }
        .with_writer(buffer.sink()),
    );

    tracing::debug!("filtered");
    tracing::info!(topic = "tunnel", "bridged");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("level=INFO msg=bridged topic=tunnel"), "{}", lines[0]);

    let bound_buffer = SharedBuffer::default();
    logshim::init(
        Config {
            level: "debug".into(),
            ..Config::default()
        }
        .with_writer(bound_buffer.sink()),
    );
    tracing::debug!(attempt = 2u64, "now visible");

    let lines = bound_buffer.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["level"], "DEBUG");
    assert_eq!(lines[0]["attempt"], 2);
}
