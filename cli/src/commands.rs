use std::io::{self, BufRead};
use walog::{JsonPayload, Level, Logger, Value};

pub fn emit(logger: &dyn Logger, level: Level, words: &[String]) {
    let values = words.iter().map(Value::from).collect::<Vec<_>>();

    match level {
        Level::Debug => logger.debug(&values),
        Level::Info => logger.info(&values),
        Level::Warn => logger.warn(&values),
        Level::Error => logger.error(&values),
    }
}

pub fn emitf(logger: &dyn Logger, level: Level, message: &str) {
    match level {
        Level::Debug => walog::debugf!(logger, "{}", message),
        Level::Info => walog::infof!(logger, "{}", message),
        Level::Warn => walog::warnf!(logger, "{}", message),
        Level::Error => walog::errorf!(logger, "{}", message),
    }
}

pub fn json(logger: &dyn Logger, label: &str, payloads: &[String]) -> Result<(), crate::Error> {
    let payloads = payloads
        .iter()
        .map(|payload| serde_json::from_str::<serde_json::Value>(payload))
        .collect::<Result<Vec<_>, _>>()?;
    let payloads = payloads
        .iter()
        .map(|payload| payload as &dyn JsonPayload)
        .collect::<Vec<_>>();

    logger.debug_jsonf(label, &payloads);

    Ok(())
}

/// Copies stdin to the logger, one line per write.
pub fn pipe(logger: &dyn Logger) -> Result<(), crate::Error> {
    let stdin = io::stdin();

    for line in stdin.lock().split(b'\n') {
        logger.write_bytes(&line?)?;
    }

    logger.sync();

    Ok(())
}

pub fn fatal(logger: &dyn Logger, message: &str) -> ! {
    walog::fatalf!(logger, "{}", message)
}
