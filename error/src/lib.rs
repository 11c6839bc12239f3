use std::fmt;

/// Request-level error taxonomy. Each variant corresponds to exactly one
/// HTTP status code; the REST layer owns that mapping.
#[derive(Debug)]
pub enum Error {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) => message,
            Self::Unauthorized(message) => message,
            Self::Forbidden(message) => message,
            Self::NotFound(message) => message,
            Self::Conflict(message) => message,
            Self::InternalServerError(message) => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Error {}
