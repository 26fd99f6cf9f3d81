//! A small logging facade.
//!
//! Application code logs through the [`Logger`] trait. [`Console`] prints
//! `[module LEVEL]message` lines to the standard streams, optionally colored
//! and filtered by a minimum level; [`Silent`] drops everything. Sub-loggers
//! extend the module path of their parent:
//!
//! ```no_run
//! use walog::Logger;
//!
//! let log = walog::console("node", "info", true);
//! let db = log.sub("db");
//!
//! walog::infof!(db, "opened {} tables", 12);
//! walog::error!(db, "compaction failed after", 3u32, "retries");
//! ```

mod macros;

pub mod config;
pub mod console;
pub mod level;
pub mod logger;
pub mod pool;
pub mod silent;
pub mod streams;
pub mod value;

mod error;

pub use config::LogConfig;
pub use console::{console, Console};
pub use error::Error;
pub use level::{Level, Severity};
pub use logger::{JsonPayload, Logger, SharedLogger};
pub use silent::{silent, Silent};
pub use streams::Streams;
pub use value::Value;
