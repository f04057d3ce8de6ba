//! Structured JSON logger
//!
//! Events render as single JSON lines with alphabetically ordered keys,
//! so identical events always produce identical bytes. Writes are
//! synchronous and unbuffered.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Planner decision detail
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured event logger.
pub struct Logger;

impl Logger {
    /// Logs an event with the given severity and fields to stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, String)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Logs to stderr (for errors)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, String)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, String)],
        writer: &mut W,
    ) {
        let line = Self::render(severity, event, fields);
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }

    /// Renders one event line. serde_json's map keeps keys sorted, which
    /// gives the deterministic ordering for free.
    fn render(severity: Severity, event: &str, fields: &[(&str, String)]) -> String {
        let mut map = Map::new();
        map.insert("event".into(), Value::String(event.into()));
        map.insert("severity".into(), Value::String(severity.as_str().into()));
        for (key, value) in fields {
            map.insert((*key).into(), Value::String(value.clone()));
        }
        Value::Object(map).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let fields = [("table", "users".to_string()), ("path", "PK_LOOKUP".to_string())];
        let first = Logger::render(Severity::Info, "classify", &fields);
        let second = Logger::render(Severity::Info, "classify", &fields);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_orders_keys_alphabetically() {
        let fields = [("zeta", "1".to_string()), ("alpha", "2".to_string())];
        let line = Logger::render(Severity::Trace, "e", &fields);
        assert!(line.find("alpha").unwrap() < line.find("zeta").unwrap());
    }

    #[test]
    fn test_render_escapes_values() {
        let fields = [("expr", "a\"b".to_string())];
        let line = Logger::render(Severity::Warn, "e", &fields);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["expr"], "a\"b");
        assert_eq!(parsed["severity"], "WARN");
    }
}
