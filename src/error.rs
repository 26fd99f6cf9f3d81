use failure_derive::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "io error: {}", _0)]
    Io(io::Error),
    #[fail(display = "config parse error: {}", _0)]
    DeserializeToml(toml::de::Error),
    #[fail(display = "config serialize error: {}", _0)]
    SerializeToml(toml::ser::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Error {
        Error::DeserializeToml(e)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Error {
        Error::SerializeToml(e)
    }
}
