//! Log levels, thresholds and severity classes.

use serde_derive::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Ordinal of the "unset" threshold. Sits below [`Level::Debug`], so a logger
/// with this threshold lets everything through.
pub const UNSET_ORDINAL: i8 = -1;

/// The level of a single log line.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    /// Parses a threshold name. Case is ignored. Empty or unknown names yield
    /// `None`, which means "log everything".
    pub fn parse_threshold(name: &str) -> Option<Level> {
        name.parse().ok()
    }

    pub fn ordinal(self) -> i8 {
        self as i8
    }

    /// The upper-case name printed inside the bracketed tag.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// ANSI color start code, if one is registered for this level.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Level::Debug => None,
            Level::Info => Some("\x1b[36m"),
            Level::Warn => Some("\x1b[33m"),
            Level::Error => Some("\x1b[31m"),
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Level::Debug | Level::Info => Severity::Normal,
            Level::Warn => Severity::Warning,
            Level::Error => Severity::Error,
        }
    }

    pub(crate) fn to_log(self) -> log::Level {
        match self {
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error => log::Level::Error,
        }
    }
}

/// Ordinal of an optional threshold, [`UNSET_ORDINAL`] when unset.
pub fn threshold_ordinal(threshold: Option<Level>) -> i8 {
    threshold.map_or(UNSET_ORDINAL, Level::ordinal)
}

/// Coarse grouping of levels for consumers that only need to know whether to
/// escalate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Normal = 0,
    Warning = 1,
    Error = 2,
}

impl Severity {
    /// Severity class of a level name. Empty or unknown names are `Normal`.
    pub fn from_level_name(name: &str) -> Severity {
        Level::parse_threshold(name).map_or(Severity::Normal, Level::severity)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Severity {
        level.severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Level::parse_threshold("warn"), Some(Level::Warn));
        assert_eq!(Level::parse_threshold("WARN"), Some(Level::Warn));
        assert_eq!(Level::parse_threshold("Error"), Some(Level::Error));
        assert_eq!(Level::parse_threshold("dEbUg"), Some(Level::Debug));
    }

    #[test]
    fn unknown_names_are_unset() {
        assert_eq!(Level::parse_threshold(""), None);
        assert_eq!(Level::parse_threshold("verbose"), None);
        assert_eq!(Level::parse_threshold("FATAL"), None);
        assert_eq!(threshold_ordinal(None), UNSET_ORDINAL);
    }

    #[test]
    fn ordinals_are_ordered() {
        let ordinals = Level::iter().map(Level::ordinal).collect::<Vec<_>>();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
        assert!(UNSET_ORDINAL < Level::Debug.ordinal());
        assert!(Level::Debug < Level::Error);
    }

    #[test]
    fn names_are_upper_case() {
        let names = Level::iter().map(Level::as_str).collect::<Vec<_>>();
        assert_eq!(names, vec!["DEBUG", "INFO", "WARN", "ERROR"]);
    }

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::from_level_name(""), Severity::Normal);
        assert_eq!(Severity::from_level_name("DEBUG"), Severity::Normal);
        assert_eq!(Severity::from_level_name("INFO"), Severity::Normal);
        assert_eq!(Severity::from_level_name("WARN").ordinal(), 1);
        assert_eq!(Severity::from_level_name("ERROR").ordinal(), 2);
        assert_eq!(Severity::from(Level::Warn), Severity::Warning);
    }

    #[test]
    fn only_debug_has_no_color() {
        assert_eq!(Level::Debug.color(), None);
        assert_eq!(Level::Info.color(), Some("\x1b[36m"));
        assert_eq!(Level::Warn.color(), Some("\x1b[33m"));
        assert_eq!(Level::Error.color(), Some("\x1b[31m"));
    }
}
