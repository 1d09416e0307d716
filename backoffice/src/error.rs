use std::fmt::Display;
use tokio::sync::mpsc;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Communication,
    DirectoryName,
    Io(std::io::Error),
    Api(storefront_api::Error),
    TomlDeserialization(toml::de::Error),
    InvalidPageSize(usize),
    QueryTooShort {
        query: String,
    },
    /// Attempted to sort a column that is not declared sortable.
    NotSortable {
        field: String,
    },
}

impl Error {
    pub fn not_sortable(field: impl std::fmt::Debug) -> Self {
        Self::NotSortable {
            field: format!("{field:?}"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Communication => write!(f, "Error sending message to channel"),
            Error::DirectoryName => write!(
                f,
                "Error generating application directory for your host system"
            ),
            Error::Io(e) => write!(f, "Standard io error <{e}>"),
            Error::Api(e) => write!(f, "Api error <{e}>"),
            Error::TomlDeserialization(e) => write!(f, "Toml deserialization error:\n{e}"),
            Error::InvalidPageSize(size) => write!(f, "Invalid page size {size}"),
            Error::QueryTooShort { query } => {
                write!(f, "Search query \"{query}\" is below the minimum length")
            }
            Error::NotSortable { field } => write!(f, "Unable to sort column {field}"),
        }
    }
}
impl std::error::Error for Error {}

impl<T> From<mpsc::error::SendError<T>> for Error {
    fn from(_value: mpsc::error::SendError<T>) -> Self {
        Error::Communication
    }
}
impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}
impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::TomlDeserialization(value)
    }
}
impl From<storefront_api::Error> for Error {
    fn from(value: storefront_api::Error) -> Self {
        Error::Api(value)
    }
}
