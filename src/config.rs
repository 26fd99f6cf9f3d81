//! Logger configuration from the command line, the environment or a TOML
//! file.

use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use structopt::StructOpt;

use crate::logger::SharedLogger;
use crate::{console, silent};

/// How to build the logger of an application.
///
/// Meant to be `#[structopt(flatten)]`-ed into the application's own command
/// line, or read from the `[log]` table of its config file.
#[derive(Clone, Debug, PartialEq, StructOpt, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Module name printed in every line.
    #[structopt(long = "log-module", env = "WALOG_MODULE", default_value = "main")]
    pub module: String,
    /// Lowest level printed: debug, info, warn or error. Prints everything if
    /// unset.
    #[structopt(long = "log-level", env = "WALOG_LEVEL")]
    pub level: Option<String>,
    /// Colors info, warn and error lines.
    #[structopt(long = "log-color")]
    pub color: bool,
    /// Drops every line.
    #[structopt(long, short)]
    pub quiet: bool,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            module: "main".to_owned(),
            level: None,
            color: false,
            quiet: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    log: LogConfig,
}

impl LogConfig {
    /// Reads the `[log]` table of a TOML document. A missing table yields the
    /// defaults.
    pub fn from_toml(content: &str) -> Result<LogConfig, crate::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.log)
    }

    /// Reads the `[log]` table of a TOML file.
    pub fn load(path: &Path) -> Result<LogConfig, crate::Error> {
        let content = fs::read_to_string(path)?;
        LogConfig::from_toml(&content)
    }

    /// Renders this configuration as a `[log]` table.
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        #[derive(Serialize)]
        struct ConfigFileRef<'a> {
            log: &'a LogConfig,
        }

        Ok(toml::to_string(&ConfigFileRef { log: self })?)
    }

    pub fn build(&self) -> SharedLogger {
        if self.quiet {
            silent()
        } else {
            console(&self.module, self.level.as_deref().unwrap_or(""), self.color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn toml_table() {
        let config = LogConfig::from_toml(
            r#"
            [log]
            module = "node"
            level = "WARN"
            color = true
            "#,
        )
        .unwrap();

        assert_eq!(config.module, "node");
        assert_eq!(config.level.as_deref(), Some("WARN"));
        assert!(config.color);
        assert!(!config.quiet);
    }

    #[test]
    fn missing_table_is_default() {
        assert_eq!(LogConfig::from_toml("").unwrap(), LogConfig::default());
        assert_eq!(
            LogConfig::from_toml("[log]\nquiet = true").unwrap(),
            LogConfig {
                quiet: true,
                ..LogConfig::default()
            }
        );
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(matches!(
            LogConfig::from_toml("[log]\ncolor = \"very\""),
            Err(crate::Error::DeserializeToml(_))
        ));
        assert!(matches!(
            LogConfig::load(Path::new("/nonexistent/walog.toml")),
            Err(crate::Error::Io(_))
        ));
    }

    #[test]
    fn toml_round_trip() {
        let config = LogConfig {
            module: "hub".to_owned(),
            level: Some("info".to_owned()),
            color: true,
            quiet: false,
        };

        let rendered = config.to_toml().unwrap();
        assert_eq!(LogConfig::from_toml(&rendered).unwrap(), config);
    }

    #[test]
    fn command_line_flags() {
        let config = LogConfig::from_iter_safe([
            "app",
            "--log-module",
            "proxy",
            "--log-level",
            "error",
            "--log-color",
        ])
        .unwrap();

        assert_eq!(config.module, "proxy");
        assert_eq!(config.level.as_deref(), Some("error"));
        assert!(config.color);
        assert!(!config.quiet);
    }

    #[test]
    fn quiet_builds_the_silent_logger() {
        let config = LogConfig {
            quiet: true,
            ..LogConfig::default()
        };

        assert!(Arc::ptr_eq(&config.build(), &crate::silent()));
    }
}
