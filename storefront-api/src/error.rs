//! Module to contain code related to errors that could be produced by the API.
use core::fmt::{Debug, Display};

/// Alias for a Result with the error type storefront-api::Error.
pub type Result<T> = core::result::Result<T, Error>;

/// This type represents all errors this API could produce.
pub struct Error {
    // Boxed to avoid passing around large errors - in the case of a status
    // error we carry the response body for the caller.
    inner: Box<ErrorKind>,
}

/// The kind of the error.
/// This list may grow over time, and it's not recommended to exhaustively
/// match on it.
#[non_exhaustive]
pub enum ErrorKind {
    /// The request never reached the server, or no response was received.
    Network(reqwest::Error),
    /// The server replied with a non-2xx status code.
    Status {
        code: u16,
        /// Response body, as returned by the server.
        message: String,
    },
    /// The response body was not in the expected JSON format.
    Json {
        /// What we were trying to deserialize.
        target: &'static str,
        err: serde_json::Error,
        /// The source body we were trying to parse.
        body: String,
    },
}

impl Error {
    /// Extract the inner kind from the error for pattern matching.
    pub fn into_kind(self) -> ErrorKind {
        *self.inner
    }
    /// The HTTP status code, if this is a Status error.
    pub fn status_code(&self) -> Option<u16> {
        match self.inner.as_ref() {
            ErrorKind::Status { code, .. } => Some(*code),
            ErrorKind::Network(_) | ErrorKind::Json { .. } => None,
        }
    }
    /// True if the request failed at the transport layer.
    pub fn is_network(&self) -> bool {
        matches!(self.inner.as_ref(), ErrorKind::Network(_))
    }
    pub(crate) fn status<S: Into<String>>(code: u16, message: S) -> Self {
        Self {
            inner: Box::new(ErrorKind::Status {
                code,
                message: message.into(),
            }),
        }
    }
    pub(crate) fn json<S: Into<String>>(
        target: &'static str,
        err: serde_json::Error,
        body: S,
    ) -> Self {
        Self {
            inner: Box::new(ErrorKind::Json {
                target,
                err,
                body: body.into(),
            }),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self {
            inner: Box::new(ErrorKind::Network(value)),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
impl std::error::Error for Error {}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Network(e) => write!(f, "Network error <{e}>"),
            ErrorKind::Status { code, message } => {
                write!(f, "Server returned status {code}: {message}")
            }
            ErrorKind::Json { target, err, .. } => {
                write!(f, "Error deserializing {target} from response <{err}>")
            }
        }
    }
}
