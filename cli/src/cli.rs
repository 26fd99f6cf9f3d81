use std::path::PathBuf;
use structopt::StructOpt;
use walog::{Level, LogConfig, Logger};

use crate::commands;

#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "walog", about = "Writes log lines through a walog logger")]
pub struct Cli {
    /// Reads the logger configuration from the `[log]` table of this TOML
    /// file. The logging flags are ignored if set.
    #[structopt(long, env = "WALOG_CONFIG")]
    pub config: Option<PathBuf>,
    #[structopt(flatten)]
    pub log: LogConfig,
    #[structopt(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_config(&self) -> Result<LogConfig, crate::Error> {
        match &self.config {
            Some(path) => Ok(LogConfig::load(path)?),
            None => Ok(self.log.clone()),
        }
    }

    pub fn execute(self) -> Result<(), crate::Error> {
        let config = self.log_config()?;
        let logger = config.build();

        walog::debug_jsonf!(logger, "effective log config", config);

        self.command.execute(&*logger)
    }
}

#[derive(Clone, Debug, StructOpt)]
pub enum Command {
    /// Logs the words, joined by spaces.
    Emit { level: Level, words: Vec<String> },
    /// Logs the message as a template line. Template lines at error level
    /// are not copied to stderr.
    Emitf { level: Level, message: String },
    /// Logs the label followed by the payload at debug level. Payloads are
    /// JSON documents; only the label is logged unless there is exactly one.
    Json { label: String, payloads: Vec<String> },
    /// Logs every line read from stdin, tagged with the module only.
    Pipe,
    /// Logs the message at error level and exits with code 1.
    Fatal { message: String },
}

impl Command {
    pub fn execute(self, logger: &dyn Logger) -> Result<(), crate::Error> {
        match self {
            Command::Emit { level, words } => {
                commands::emit(logger, level, &words);
                Ok(())
            }
            Command::Emitf { level, message } => {
                commands::emitf(logger, level, &message);
                Ok(())
            }
            Command::Json { label, payloads } => commands::json(logger, &label, &payloads),
            Command::Pipe => commands::pipe(logger),
            Command::Fatal { message } => commands::fatal(logger, &message),
        }
    }
}
