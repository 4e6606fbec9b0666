/// This is the library that generates memorable passwords, a word from one of the bundled word
/// lists with a short number spliced into it.
pub mod password;
/// The three word lists and how a list is picked for each wordlist mode.
pub mod words;
pub mod capitalise;
pub mod number;
/// Reading and writing the generator settings, from a toml file and the environment.
pub mod settings;

pub(crate) mod error;

pub use capitalise::CapitaliseMode;
pub use error::{Error, Result};
pub use password::{splice, MemorablePassword};
pub use settings::Settings;
pub use words::{WordSource, Wordlist, WordlistMode};
