use std::fmt;

/// Custom error type for application operations, including specific error codes.
///
/// Each variant represents a distinct error condition with a unique error code for easier debugging
/// and error handling in applications.
#[derive(Debug)]
pub enum Error {
    /// I/O-related error (e.g., file operations).
    /// Error code: 1000
    Io(std::io::Error),
    /// Database-specific error (e.g., a missing data file).
    /// Error code: 2000
    Db(String),
    /// Authentication or permission error.
    /// Error code: 3000
    Auth(String),
    /// Miscellaneous uncategorized error.
    /// Error code: 9000
    Other(String),
}

impl Error {
    /// Returns the error code associated with this error variant.
    ///
    /// # Examples
    /// ```
    /// let err = Error::Auth("Unknown user".to_string());
    /// assert_eq!(err.code(), 3000);
    /// ```
    pub fn code(&self) -> u32 {
        match self {
            Error::Io(_) => 1000,
            Error::Db(_) => 2000,
            Error::Auth(_) => 3000,
            Error::Other(_) => 9000,
        }
    }

    /// Returns a human-readable error category for this error variant.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(_) => "I/O",
            Error::Db(_) => "Database",
            Error::Auth(_) => "Authentication",
            Error::Other(_) => "Other",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "[{}] I/O Error: {}", self.code(), e),
            Error::Db(msg) => write!(f, "[{}] Database Error: {}", self.code(), msg),
            Error::Auth(msg) => write!(f, "[{}] Authentication Error: {}", self.code(), msg),
            Error::Other(msg) => write!(f, "[{}] Unknown Error: {}", self.code(), msg),
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

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Convenience macro to create an `Error` with a formatted message.
///
/// # Examples
/// ```
/// use crate::errors::{Error, err};
/// let err = err!(Db, "Data file '{}' not found", "books.csv");
/// assert_eq!(err.code(), 2000);
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident, $msg:expr) => {
        $crate::errors::Error::$variant($msg.to_string())
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::errors::Error::$variant(format!($fmt, $($arg)*))
    };
}
