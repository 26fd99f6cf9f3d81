use std::fmt;
use std::io;
use std::process;
use std::sync::Arc;

use crate::logger::{JsonPayload, Logger, SharedLogger};
use crate::Value;

lazy_static::lazy_static! {
    static ref SILENT: SharedLogger = Arc::new(Silent);
}

/// The process-wide logger that drops everything.
pub fn silent() -> SharedLogger {
    SILENT.clone()
}

/// A logger that silently drops everything. Fatal calls still exit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Logger for Silent {
    fn debugf(&self, _: fmt::Arguments<'_>) {}
    fn infof(&self, _: fmt::Arguments<'_>) {}
    fn warnf(&self, _: fmt::Arguments<'_>) {}
    fn errorf(&self, _: fmt::Arguments<'_>) {}

    fn fatalf(&self, _: fmt::Arguments<'_>) -> ! {
        process::exit(1)
    }

    fn debug(&self, _: &[Value<'_>]) {}
    fn info(&self, _: &[Value<'_>]) {}
    fn warn(&self, _: &[Value<'_>]) {}
    fn error(&self, _: &[Value<'_>]) {}
    fn debug_jsonf(&self, _: &str, _: &[&dyn JsonPayload]) {}

    fn write_bytes(&self, bytes: &[u8]) -> io::Result<usize> {
        Ok(bytes.len())
    }

    fn sync(&self) {}

    fn sub(&self, _: &str) -> SharedLogger {
        silent()
    }
}
