use std::fmt;

/// Errors raised at the crate's parsing boundary. Metric functions never fail.
#[derive(Debug)]
pub enum CefError {
    Io(std::io::Error),
    Config(toml::de::Error),
    InvalidConfig(String),
    UnknownMode(String),
    UnknownComponent(String),
}

impl fmt::Display for CefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CefError::Io(e) => write!(f, "I/O error: {e}"),
            CefError::Config(e) => write!(f, "config parse error: {e}"),
            CefError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            CefError::UnknownMode(s) => write!(f, "unknown agent mode: '{s}'"),
            CefError::UnknownComponent(s) => write!(f, "unknown context component: '{s}'"),
        }
    }
}

impl std::error::Error for CefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CefError::Io(e) => Some(e),
            CefError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CefError {
    fn from(e: std::io::Error) -> Self {
        CefError::Io(e)
    }
}

impl From<toml::de::Error> for CefError {
    fn from(e: toml::de::Error) -> Self {
        CefError::Config(e)
    }
}

pub type Result<T> = std::result::Result<T, CefError>;
