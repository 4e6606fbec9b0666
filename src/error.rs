use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A capitalise mode, wordlist mode or digit count that isn't recognised.
    InvalidConfiguration(String),
    /// The chosen word is too short to have a number spliced into it.
    DegenerateWord(String),
    Generic(&'static str),
    Io(io::Error),
    ConfigError(config::ConfigError),
    SerError(toml::ser::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerError(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "invalid configuration: {err}"),
            Self::DegenerateWord(word) => write!(
                f,
                "the word '{word}' is too short to insert a number into"
            ),
            Self::Generic(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
