//! Runs in its own process so the init below is the first one.

use std::io::Write;
use std::sync::{Arc, Mutex};

use puffstore_observability::config::{LOG_FILTER_VAR, LOG_FORMAT_VAR};
use puffstore_observability::tracing::init_with_writer;
use puffstore_observability::{ConfigError, LogConfig};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn fallbacks_are_logged_on_first_init() {
    let config = LogConfig::from_lookup(|key| match key {
        LOG_FILTER_VAR => Some("[[not a filter".to_string()),
        LOG_FORMAT_VAR => Some("xml".to_string()),
        _ => None,
    });
    assert_eq!(
        config.format_error,
        Some(ConfigError::UnknownFormat("xml".to_string()))
    );

    let buf = SharedBuf::default();
    let writer = buf.clone();
    init_with_writer(&config, move || writer.clone());
    tracing::info!("after first init");

    let output = buf.contents();
    assert!(output.contains("invalid log filter; using info"), "{output}");
    assert!(output.contains("falling back to json log format"), "{output}");
    assert!(output.contains("after first init"), "{output}");
}
