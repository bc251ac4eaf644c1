use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(String),
    MalformedPath(String),
    InvalidValue(String, String),
    IndexOutOfRange(usize, usize),
    Document(String),
    MissingAttribute(String),
    Cli(String),
    Message(String),
    Other(Box<dyn StdError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::MalformedPath(reason) => write!(f, "Malformed path data: {reason}"),
            Error::InvalidValue(kind, value) => write!(f, "Invalid {kind}: '{value}'"),
            Error::IndexOutOfRange(index, dimension) => {
                write!(
                    f,
                    "Control point index {index} out of range for Bezier of dimension {dimension}"
                )
            }
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::MissingAttribute(attr) => write!(f, "Element missing attribute '{attr}'"),
            Error::Cli(reason) => write!(f, "Command line error: {reason}"),
            Error::Message(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(e) => Some(&**e),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::Message(err.to_string())
    }
}
