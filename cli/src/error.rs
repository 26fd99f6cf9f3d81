use failure_derive::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    Log(walog::Error),
    #[fail(display = "io error: {}", _0)]
    Io(io::Error),
    #[fail(display = "bad json payload: {}", _0)]
    DeserializeJson(serde_json::Error),
}

impl From<walog::Error> for Error {
    fn from(e: walog::Error) -> Error {
        Error::Log(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::DeserializeJson(e)
    }
}
