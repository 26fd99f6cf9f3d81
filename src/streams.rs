//! The two process-wide output streams.
//!
//! Lines from every logger end up on the informational stream (stdout). Lines
//! from error-level concatenation calls are also copied to the error stream
//! (stderr), which is decorated with the source location of the call. Both are
//! `log4rs` console appenders, which lock the underlying standard stream for
//! each record, so a single handle can be shared by every logger and thread.

use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::Append;
use log4rs::encode::pattern::PatternEncoder;
use std::ffi::OsStr;
use std::panic::Location;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// `2009/01/23 01:23:23 [module INFO]message`
pub const INFO_PATTERN: &str = "{d(%Y/%m/%d %H:%M:%S)} {m}{n}";
/// `2009/01/23 01:23:23 main.rs:23: [module ERROR]message`
pub const ERROR_PATTERN: &str = "{d(%Y/%m/%d %H:%M:%S)} {f}:{L}: {m}{n}";

static STANDARD_STREAMS: OnceLock<Arc<Streams>> = OnceLock::new();

/// Handles to stdout and stderr, created on first use and shared afterwards.
pub fn standard_streams() -> Arc<Streams> {
    STANDARD_STREAMS
        .get_or_init(|| Arc::new(Streams::standard()))
        .clone()
}

#[derive(Debug)]
pub struct Streams {
    info: Box<dyn Append>,
    error: Box<dyn Append>,
}

impl Streams {
    /// Builds streams out of arbitrary appenders. Loggers built with
    /// [`Console::with_streams`](crate::Console::with_streams) write here
    /// instead of the standard streams.
    pub fn new(info: Box<dyn Append>, error: Box<dyn Append>) -> Streams {
        Streams { info, error }
    }

    fn standard() -> Streams {
        Streams::new(
            Box::new(console_appender(Target::Stdout, INFO_PATTERN)),
            Box::new(console_appender(Target::Stderr, ERROR_PATTERN)),
        )
    }

    pub(crate) fn info(&self, level: log::Level, module: &str, line: &str, location: &Location<'_>) {
        append(&*self.info, level, module, line, location);
    }

    pub(crate) fn error(&self, module: &str, line: &str, location: &Location<'_>) {
        append(&*self.error, log::Level::Error, module, line, location);
    }

    pub fn flush(&self) {
        self.info.flush();
        self.error.flush();
    }
}

fn console_appender(target: Target, pattern: &str) -> ConsoleAppender {
    ConsoleAppender::builder()
        .target(target)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build()
}

/// Base name of a source path, which is what `{f}` prints.
fn short_file(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(path)
}

fn append(appender: &dyn Append, level: log::Level, module: &str, line: &str, location: &Location<'_>) {
    // Nothing sensible can be done from inside a logging call if the standard
    // streams are gone.
    let _ = appender.append(
        &log::Record::builder()
            .args(format_args!("{}", line))
            .level(level)
            .target(module)
            .file(Some(short_file(location.file())))
            .line(Some(location.line()))
            .build(),
    );
}
