use serde::Serialize;
use std::fmt;
use std::io;
use std::sync::Arc;

use crate::Value;

/// A logger shared between threads and components.
pub type SharedLogger = Arc<dyn Logger>;

/// A simple logger that can hand out sub-loggers for specific areas.
///
/// Methods ending in `f` take a template (see the [`infof!`](crate::infof)
/// family of macros); the others take a sequence of values that are converted
/// to text and joined with single spaces (see [`info!`](crate::info)).
/// Nothing is formatted for calls below the logger's threshold.
pub trait Logger: Send + Sync {
    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Logs like [`Logger::errorf`] and then exits the process with code 1.
    /// The exit happens even if the line itself is filtered out.
    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> !;

    #[track_caller]
    fn debug(&self, values: &[Value<'_>]);
    #[track_caller]
    fn info(&self, values: &[Value<'_>]);
    #[track_caller]
    fn warn(&self, values: &[Value<'_>]);
    #[track_caller]
    fn error(&self, values: &[Value<'_>]);

    /// Logs `label` followed by the JSON text of the payload at debug level.
    /// Only the label is logged if serialization fails or if there is not
    /// exactly one payload.
    #[track_caller]
    fn debug_jsonf(&self, label: &str, payload: &[&dyn JsonPayload]);

    /// Logs raw bytes as a single line tagged with the module. Always reports
    /// the whole input as written.
    #[track_caller]
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<usize>;

    fn sync(&self);

    /// A logger for `module` nested under this one.
    fn sub(&self, module: &str) -> SharedLogger;
}

/// Anything that can be rendered as JSON by [`Logger::debug_jsonf`].
pub trait JsonPayload {
    fn to_json(&self) -> serde_json::Result<String>;
}

impl<T: Serialize + ?Sized> JsonPayload for T {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Lets any logger stand in where an `io::Write` is expected.
impl<'a> io::Write for &'a dyn Logger {
    #[track_caller]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sync();
        Ok(())
    }
}
