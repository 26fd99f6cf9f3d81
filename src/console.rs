//! The logger that prints to the standard streams.

use std::fmt::{self, Write};
use std::io;
use std::panic::Location;
use std::process;
use std::sync::Arc;

use crate::logger::{JsonPayload, Logger, SharedLogger};
use crate::pool::global_pool;
use crate::streams::{standard_streams, Streams};
use crate::value::{join_into, Value};
use crate::Level;

const COLOR_RESET: &str = "\x1b[0m";

/// A logger writing `[module LEVEL]message` lines to stdout, copying
/// error-level concatenation calls to stderr.
#[derive(Clone, Debug)]
pub struct Console {
    module: String,
    min: Option<Level>,
    color: bool,
    streams: Arc<Streams>,
}

/// Builds a shared [`Console`] logger. See [`Console::new`].
pub fn console(module: &str, min_level: &str, color: bool) -> SharedLogger {
    Arc::new(Console::new(module, min_level, color))
}

impl Console {
    /// A logger tagging its lines with `module`.
    ///
    /// `min_level` is one of `DEBUG`, `INFO`, `WARN` or `ERROR`, in any case.
    /// An empty or unknown name lets every level through. If `color` is set,
    /// info, warn and error lines are colored cyan, yellow and red with ANSI
    /// escape codes.
    pub fn new(module: &str, min_level: &str, color: bool) -> Console {
        Console::with_streams(module, min_level, color, standard_streams())
    }

    /// Like [`Console::new`], but writing to the given streams.
    pub fn with_streams(module: &str, min_level: &str, color: bool, streams: Arc<Streams>) -> Console {
        Console {
            module: module.to_owned(),
            min: Level::parse_threshold(min_level),
            color,
            streams,
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// The lowest level that is printed, `None` if everything is.
    pub fn threshold(&self) -> Option<Level> {
        self.min
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.min.map_or(true, |min| level >= min)
    }

    /// Writes the color code and the bracketed tag. Returns whether the line
    /// must end with a reset code, which is every line of a colored logger.
    fn open_line(&self, buf: &mut String, level: Level) -> bool {
        if let Some(code) = level.color().filter(|_| self.color) {
            buf.push_str(code);
        }

        buf.push('[');
        buf.push_str(&self.module);
        buf.push(' ');
        buf.push_str(level.as_str());
        buf.push(']');

        self.color
    }

    #[track_caller]
    fn outputf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let mut buf = global_pool().get();
        let colored = self.open_line(&mut buf, level);
        match args.as_str() {
            Some(template) => buf.push_str(template),
            None => {
                let _ = buf.write_fmt(args);
            }
        }
        if colored {
            buf.push_str(COLOR_RESET);
        }

        self.streams
            .info(level.to_log(), &self.module, &buf, Location::caller());
    }

    #[track_caller]
    fn output(&self, level: Level, values: &[Value<'_>]) {
        if !self.enabled(level) {
            return;
        }

        let mut buf = global_pool().get();
        let colored = self.open_line(&mut buf, level);
        join_into(&mut buf, values);
        if colored {
            buf.push_str(COLOR_RESET);
        }

        let location = Location::caller();
        self.streams
            .info(level.to_log(), &self.module, &buf, location);
        if level == Level::Error {
            self.streams.error(&self.module, &buf, location);
        }
    }
}

impl Logger for Console {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.outputf(Level::Debug, args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.outputf(Level::Info, args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.outputf(Level::Warn, args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.outputf(Level::Error, args);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.outputf(Level::Error, args);
        self.streams.flush();
        process::exit(1)
    }

    fn debug(&self, values: &[Value<'_>]) {
        self.output(Level::Debug, values);
    }

    fn info(&self, values: &[Value<'_>]) {
        self.output(Level::Info, values);
    }

    fn warn(&self, values: &[Value<'_>]) {
        self.output(Level::Warn, values);
    }

    fn error(&self, values: &[Value<'_>]) {
        self.output(Level::Error, values);
    }

    fn debug_jsonf(&self, label: &str, payload: &[&dyn JsonPayload]) {
        if !self.enabled(Level::Debug) {
            return;
        }

        let json = match payload {
            [single] => single.to_json().ok(),
            _ => None,
        };

        match json {
            Some(json) => self.output(Level::Debug, &[Value::Str(label), Value::Str(&json)]),
            None => self.output(Level::Debug, &[Value::Str(label), Value::Nil]),
        }
    }

    fn write_bytes(&self, bytes: &[u8]) -> io::Result<usize> {
        let text = bytes.strip_suffix(b"\n").unwrap_or(bytes);

        let mut buf = global_pool().get();
        buf.push('[');
        buf.push_str(&self.module);
        buf.push_str("] ");
        Value::Bytes(text).write_to(&mut buf);

        self.streams
            .info(log::Level::Info, &self.module, &buf, Location::caller());

        Ok(bytes.len())
    }

    fn sync(&self) {}

    fn sub(&self, module: &str) -> SharedLogger {
        Arc::new(Console {
            module: format!("{}/{}", self.module, module),
            min: self.min,
            color: self.color,
            streams: self.streams.clone(),
        })
    }
}
