use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The surface failed to acquire, paint, read or release the terminal.
    Io(io::Error),
    /// A widget callback (menu action, change hook, enter hook) failed.
    Callback(String),
    Config(String),
}

impl Error {
    pub fn callback(msg: impl Into<String>) -> Self {
        Error::Callback(msg.into())
    }

    /// True when the surface reported an interrupt (Ctrl+C in raw mode).
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::Interrupted)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "terminal I/O failed: {}", err),
            Error::Callback(msg) => write!(f, "widget callback failed: {}", msg),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "../tests/unit/error.rs"]
mod tests;
