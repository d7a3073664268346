//! Report and diagnostic output
//!
//! - Report lines (check failures, invalid files) are always written
//! - Diagnostic events are structured JSON, one line per event, and only
//!   written in verbose mode
//! - Deterministic key ordering: event, severity, then fields by key
//! - Synchronous, flushed per line; write errors are ignored

use std::fmt;
use std::io::{self, Stdout, Write};

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace = 0,
    Info = 1,
    Error = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output sink threaded through the validator.
///
/// Created once at startup; the verbose flag never changes afterward.
pub struct Logger<W: Write = Stdout> {
    writer: W,
    verbose: bool,
}

impl Logger<Stdout> {
    /// Logger writing to standard output
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl Logger<Vec<u8>> {
    /// Logger writing into memory, for inspecting output
    pub fn capture(verbose: bool) -> Self {
        Self::new(Vec::new(), verbose)
    }

    /// Everything written so far
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<W: Write> Logger<W> {
    pub fn new(writer: W, verbose: bool) -> Self {
        Self { writer, verbose }
    }

    /// Writes a human-readable report line, regardless of verbosity.
    pub fn report(&mut self, line: impl fmt::Display) {
        let _ = writeln!(self.writer, "{}", line);
        let _ = self.writer.flush();
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.report("");
    }

    /// Writes a diagnostic event if verbose mode is on.
    pub fn log(&mut self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !self.verbose {
            return;
        }

        let line = render_event(severity, event, fields);
        let _ = self.writer.write_all(line.as_bytes());
        let _ = self.writer.flush();
    }

    pub fn trace(&mut self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    pub fn info(&mut self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    pub fn error(&mut self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// Renders one event as a single JSON line.
fn render_event(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":");
    push_json_string(&mut output, event);
    output.push_str(",\"severity\":");
    push_json_string(&mut output, severity.as_str());

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted {
        output.push(',');
        push_json_string(&mut output, key);
        output.push(':');
        push_json_string(&mut output, value);
    }

    output.push_str("}\n");
    output
}

fn push_json_string(output: &mut String, s: &str) {
    // Serializing a &str cannot fail
    match serde_json::to_string(s) {
        Ok(quoted) => output.push_str(&quoted),
        Err(_) => output.push_str("\"\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_always_written() {
        let mut log = Logger::capture(false);
        log.report("=> title undefined");
        assert_eq!(log.output(), "=> title undefined\n");
    }

    #[test]
    fn test_diagnostics_suppressed_when_quiet() {
        let mut log = Logger::capture(false);
        log.trace("FZP_READ", &[("path", "a.fzp")]);
        log.info("FZP_VALID", &[]);
        assert!(log.output().is_empty());
    }

    #[test]
    fn test_diagnostic_json_format() {
        let mut log = Logger::capture(true);
        log.trace("FZP_READ", &[("path", "a.fzp")]);

        let parsed: serde_json::Value = serde_json::from_str(&log.output()).unwrap();
        assert_eq!(parsed["event"], "FZP_READ");
        assert_eq!(parsed["severity"], "TRACE");
        assert_eq!(parsed["path"], "a.fzp");
    }

    #[test]
    fn test_diagnostic_key_ordering() {
        let a = render_event(Severity::Info, "E", &[("zebra", "1"), ("apple", "2")]);
        let b = render_event(Severity::Info, "E", &[("apple", "2"), ("zebra", "1")]);
        assert_eq!(a, b);
        assert!(a.find("\"event\"").unwrap() < a.find("\"severity\"").unwrap());
        assert!(a.find("apple").unwrap() < a.find("zebra").unwrap());
    }

    #[test]
    fn test_diagnostic_escapes_and_is_one_line() {
        let line = render_event(Severity::Error, "E", &[("path", "dir/\"odd\"\nname.fzp")]);
        assert_eq!(line.matches('\n').count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["path"], "dir/\"odd\"\nname.fzp");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Error);
    }
}
