use gloo::net::http::Request;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Serialize, PartialEq)]
struct LogRequest {
    level: String,
    message: String,
    component: Option<String>,
}

impl LogRequest {
    fn from_record(record: &Record) -> Self {
        Self {
            level: record.level().as_str().to_lowercase(),
            message: record.args().to_string(),
            component: Some(record.target().to_string()),
        }
    }
}

/// `log` backend writing to the browser console, optionally mirrored to the server
pub struct ConsoleLogger {
    level: LevelFilter,
    remote_endpoint: Option<String>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, remote_endpoint: Option<String>) -> Self {
        Self {
            level,
            remote_endpoint,
        }
    }

    /// Install as the global logger. Only the first call wins.
    pub fn init(self) {
        let level = self.level;
        if log::set_boxed_logger(Box::new(self)).is_ok() {
            log::set_max_level(level);
        }
    }

    fn forward(&self, record: &Record) {
        let Some(endpoint) = self.remote_endpoint.clone() else {
            return;
        };
        let request = LogRequest::from_record(record);

        // Send log asynchronously without blocking
        spawn_local(async move {
            if let Ok(builder) = Request::post(&endpoint).json(&request) {
                let _ = builder.send().await;
            }
        });
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }

        // Debug chatter stays local
        if record.level() <= Level::Info {
            self.forward(record);
        }
    }

    fn flush(&self) {}
}
