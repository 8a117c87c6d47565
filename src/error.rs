//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A csv line that can't be split into marker, word, tag and trailing field.
    /// `line` is 1-based.
    MalformedRecord {
        line: usize,
        content: String,
    },
    /// A sentence token that has no `=` delimiter.
    MalformedToken(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::MalformedRecord { line, content } => {
                write!(f, "malformed record at line {}: {:?}", line, content)
            }
            Error::MalformedToken(t) => write!(f, "malformed token: {:?}", t),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}
