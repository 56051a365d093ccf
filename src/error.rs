use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A key path step could not be resolved. Carries the first failing key.
    #[error("missing key: {0:?}")]
    MissingKey(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Error::GitHub(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
