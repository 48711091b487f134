//! Emission sink
//!
//! Formats an approved entry and writes it to an output channel. The
//! channel is a trait so hosts can redirect output; the console
//! implementation forwards to the matching `tracing` macro. A missing
//! channel makes every emit a silent no-op.

use super::{Level, LogEntry};
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;

/// Output channel class an entry is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Debug,
    Info,
    Warn,
    Error,
}

impl Channel {
    /// Severity-to-channel mapping: trace and debug share the debug
    /// channel, error and fatal share the error channel
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => Channel::Debug,
            Level::Info => Channel::Info,
            Level::Warn => Channel::Warn,
            Level::Error | Level::Fatal => Channel::Error,
        }
    }
}

/// Destination for formatted log lines. Implementations must not panic.
pub trait LogChannel: Send + Sync {
    fn write(&self, channel: Channel, line: &str, extras: &[serde_json::Value]);
}

impl<T: LogChannel + ?Sized> LogChannel for std::sync::Arc<T> {
    fn write(&self, channel: Channel, line: &str, extras: &[serde_json::Value]) {
        (**self).write(channel, line, extras)
    }
}

/// Console-equivalent channel backed by `tracing` macros
pub struct ConsoleChannel;

impl LogChannel for ConsoleChannel {
    fn write(&self, channel: Channel, line: &str, extras: &[serde_json::Value]) {
        let line = append_extras(line, extras);
        match channel {
            Channel::Debug => tracing::debug!(target: "logtap", "{}", line),
            Channel::Info => tracing::info!(target: "logtap", "{}", line),
            Channel::Warn => tracing::warn!(target: "logtap", "{}", line),
            Channel::Error => tracing::error!(target: "logtap", "{}", line),
        }
    }
}

/// Channel that captures writes in memory, for assertions
#[derive(Default)]
pub struct CaptureChannel {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl CaptureChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LogChannel for CaptureChannel {
    fn write(&self, channel: Channel, line: &str, extras: &[serde_json::Value]) {
        self.lines
            .lock()
            .push((channel, append_extras(line, extras)));
    }
}

fn append_extras(line: &str, extras: &[serde_json::Value]) -> String {
    if extras.is_empty() {
        return line.to_string();
    }
    let rendered: Vec<String> = extras.iter().map(|v| v.to_string()).collect();
    format!("{} {}", line, rendered.join(" "))
}

/// Everything a custom formatter gets to see
pub struct FormatContext<'a> {
    pub level: Level,
    pub message: &'a str,
    pub timestamp: DateTime<Utc>,
    pub extras: &'a [serde_json::Value],
}

/// Custom line formatter, overriding the default layout
pub type Formatter = Box<dyn Fn(&FormatContext<'_>) -> String + Send + Sync>;

/// Formats approved entries and routes them to a channel
pub struct EmissionSink {
    channel: Option<Box<dyn LogChannel>>,
    formatter: Option<Formatter>,
    include_timestamp: bool,
}

impl EmissionSink {
    pub fn new(channel: Box<dyn LogChannel>, include_timestamp: bool) -> Self {
        Self {
            channel: Some(channel),
            formatter: None,
            include_timestamp,
        }
    }

    /// Sink with no channel: every emit is a silent no-op
    pub fn disconnected() -> Self {
        Self {
            channel: None,
            formatter: None,
            include_timestamp: true,
        }
    }

    pub fn set_formatter(&mut self, formatter: Formatter) {
        self.formatter = Some(formatter);
    }

    /// Format and write an approved entry. Never fails.
    pub fn emit(&self, entry: &LogEntry) {
        let Some(channel) = &self.channel else {
            return;
        };

        let line = match &self.formatter {
            Some(format) => format(&FormatContext {
                level: entry.level,
                message: &entry.message,
                timestamp: entry.timestamp,
                extras: &entry.extras,
            }),
            None => self.default_format(entry),
        };

        // Extras already consumed by a custom formatter stay out of the line
        let extras: &[serde_json::Value] = if self.formatter.is_some() {
            &[]
        } else {
            &entry.extras
        };

        channel.write(Channel::for_level(entry.level), &line, extras);
    }

    fn default_format(&self, entry: &LogEntry) -> String {
        if self.include_timestamp {
            format!(
                "[{}] {}",
                entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                entry.message
            )
        } else {
            entry.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn capture_sink(include_timestamp: bool) -> (EmissionSink, Arc<CaptureChannel>) {
        let capture = Arc::new(CaptureChannel::new());
        let sink = EmissionSink::new(Box::new(capture.clone()), include_timestamp);
        (sink, capture)
    }

    #[test]
    fn test_channel_mapping() {
        assert_eq!(Channel::for_level(Level::Trace), Channel::Debug);
        assert_eq!(Channel::for_level(Level::Debug), Channel::Debug);
        assert_eq!(Channel::for_level(Level::Info), Channel::Info);
        assert_eq!(Channel::for_level(Level::Warn), Channel::Warn);
        assert_eq!(Channel::for_level(Level::Error), Channel::Error);
        assert_eq!(Channel::for_level(Level::Fatal), Channel::Error);
    }

    #[test]
    fn test_default_format_with_timestamp() {
        let (sink, capture) = capture_sink(true);
        sink.emit(&LogEntry::bare(Level::Info, "ready"));

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Channel::Info);
        assert!(lines[0].1.starts_with('['));
        assert!(lines[0].1.ends_with("] ready"));
        // RFC 3339 date separator
        assert!(lines[0].1.contains('T'));
    }

    #[test]
    fn test_default_format_without_timestamp() {
        let (sink, capture) = capture_sink(false);
        sink.emit(&LogEntry::bare(Level::Warn, "bare"));

        assert_eq!(capture.lines()[0], (Channel::Warn, "bare".to_string()));
    }

    #[test]
    fn test_extras_appended_after_message() {
        let (sink, capture) = capture_sink(false);
        sink.emit(&LogEntry::new(
            Level::Error,
            None,
            "failed",
            vec![serde_json::json!({"code": 7}), serde_json::json!("retry")],
        ));

        let line = &capture.lines()[0].1;
        assert!(line.starts_with("failed "));
        assert!(line.contains("\"code\":7"));
        assert!(line.contains("\"retry\""));
    }

    #[test]
    fn test_custom_formatter_overrides_default() {
        let (mut sink, capture) = capture_sink(true);
        sink.set_formatter(Box::new(|ctx| {
            format!("{}|{}|{}", ctx.level, ctx.message, ctx.extras.len())
        }));
        sink.emit(&LogEntry::new(
            Level::Fatal,
            None,
            "boom",
            vec![serde_json::json!(1)],
        ));

        assert_eq!(capture.lines()[0], (Channel::Error, "fatal|boom|1".to_string()));
    }

    #[test]
    fn test_disconnected_sink_is_noop() {
        let sink = EmissionSink::disconnected();
        // No channel: must not panic, nothing observable happens
        sink.emit(&LogEntry::bare(Level::Error, "lost"));
    }
}
