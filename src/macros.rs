//! Call-site macros. The logger expression may be a `Console`, a `Silent`, a
//! reference or a [`SharedLogger`](crate::SharedLogger).

/// Template call at debug level: `debugf!(log, "got {:?}", riddle)`.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.debugf(::std::format_args!($($arg)+))
    }};
}

/// Template call at info level.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.infof(::std::format_args!($($arg)+))
    }};
}

/// Template call at warn level.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.warnf(::std::format_args!($($arg)+))
    }};
}

/// Template call at error level.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.errorf(::std::format_args!($($arg)+))
    }};
}

/// Template call at error level that exits the process afterwards.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.fatalf(::std::format_args!($($arg)+))
    }};
}

/// Concatenation call at debug level: `debug!(log, "took", 3.5, "ms")`.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.debug(&[$($crate::Value::from($value)),*])
    }};
}

/// Concatenation call at info level.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.info(&[$($crate::Value::from($value)),*])
    }};
}

/// Concatenation call at warn level.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.warn(&[$($crate::Value::from($value)),*])
    }};
}

/// Concatenation call at error level. Also copied to stderr.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.error(&[$($crate::Value::from($value)),*])
    }};
}

/// `debug_jsonf!(log, "peer", peer)` logs `peer` as JSON after the label.
#[macro_export]
macro_rules! debug_jsonf {
    ($logger:expr, $label:expr $(, $payload:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.debug_jsonf($label, &[$(&$payload as &dyn $crate::JsonPayload),*])
    }};
}
