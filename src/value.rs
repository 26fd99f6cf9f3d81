//! Values accepted by concatenation calls and their text form.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::{self, Write};

/// One argument of a concatenation call.
///
/// Most primitive types convert with `Value::from`, which is what the
/// [`info!`](crate::info) family of macros does. Errors and arbitrary
/// `Debug` values are wrapped explicitly with [`Value::error`] and
/// [`Value::other`].
#[derive(Clone, Copy, Debug)]
pub enum Value<'a> {
    Nil,
    Error(&'a (dyn StdError + 'a)),
    F32(f32),
    F64(f64),
    Int(i64),
    Uint(u64),
    Bool(bool),
    Str(&'a str),
    Bytes(&'a [u8]),
    Other(&'a (dyn fmt::Debug + 'a)),
}

impl<'a> Value<'a> {
    pub fn error(error: &'a (dyn StdError + 'a)) -> Value<'a> {
        Value::Error(error)
    }

    pub fn other(value: &'a (dyn fmt::Debug + 'a)) -> Value<'a> {
        Value::Other(value)
    }

    /// Text form of this value. Strings, and byte sequences that are valid
    /// UTF-8, are borrowed as they are.
    pub fn to_text(&self) -> Cow<'a, str> {
        match *self {
            Value::Nil => Cow::Borrowed(""),
            Value::Str(text) => Cow::Borrowed(text),
            Value::Bytes(bytes) => String::from_utf8_lossy(bytes),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            _ => {
                let mut text = String::new();
                self.write_to(&mut text);
                Cow::Owned(text)
            }
        }
    }

    /// Appends the text form of this value to `buf`.
    pub fn write_to(&self, buf: &mut String) {
        // Writing into a `String` cannot fail.
        let _ = match *self {
            Value::Nil => Ok(()),
            Value::Error(error) => write!(buf, "{}", error),
            Value::F32(value) => write_float(buf, value),
            Value::F64(value) => write_float(buf, value),
            Value::Int(value) => write!(buf, "{}", value),
            Value::Uint(value) => write!(buf, "{}", value),
            Value::Bool(value) => {
                buf.push_str(if value { "true" } else { "false" });
                Ok(())
            }
            Value::Str(text) => {
                buf.push_str(text);
                Ok(())
            }
            Value::Bytes(bytes) => {
                buf.push_str(&String::from_utf8_lossy(bytes));
                Ok(())
            }
            Value::Other(value) => write!(buf, "{:?}", value),
        };
    }
}

/// Shortest round-trip decimal, never in exponent form.
fn write_float<F>(buf: &mut String, value: F) -> fmt::Result
where
    F: fmt::Display + Into<f64> + Copy,
{
    let wide: f64 = value.into();
    if wide.is_infinite() {
        buf.push_str(if wide > 0.0 { "+Inf" } else { "-Inf" });
        Ok(())
    } else {
        write!(buf, "{}", value)
    }
}

/// Appends the text of every value, separated by single spaces.
pub fn join_into(buf: &mut String, values: &[Value<'_>]) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            buf.push(' ');
        }
        value.write_to(buf);
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl<'a> From<$t> for Value<'a> {
            fn from(value: $t) -> Value<'a> {
                Value::Int(value as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl<'a> From<$t> for Value<'a> {
            fn from(value: $t) -> Value<'a> {
                Value::Uint(value as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl<'a> From<f32> for Value<'a> {
    fn from(value: f32) -> Value<'a> {
        Value::F32(value)
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(value: f64) -> Value<'a> {
        Value::F64(value)
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(value: bool) -> Value<'a> {
        Value::Bool(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Value<'a> {
        Value::Str(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Value<'a> {
        Value::Str(value)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Value<'a> {
        Value::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(value: &'a Vec<u8>) -> Value<'a> {
        Value::Bytes(value)
    }
}

impl<'a> From<&'a (dyn StdError + 'a)> for Value<'a> {
    fn from(value: &'a (dyn StdError + 'a)) -> Value<'a> {
        Value::Error(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Value<'a> {
        value.map_or(Value::Nil, Into::into)
    }
}
