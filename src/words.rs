use std::{fmt, str::FromStr};

use rand::{seq::SliceRandom, Rng};

pub use crate::error::{Error, Result};

static ABSTRACT_WORDS: &str = include_str!("wordlists/abstract_words.wordlist");
static UK_LOCATIONS: &str = include_str!("wordlists/uk_locations.wordlist");
static WORLDWIDE_LOCATIONS: &str = include_str!("wordlists/worldwide_locations.wordlist");

/// How many random draws are made before giving up on the character limit.
pub const MAX_ATTEMPTS: usize = 50;
/// Length of the word made up when no listed word fits.
pub const FALLBACK_LENGTH: usize = 4;

/// One of the three word lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wordlist {
    /// Around a thousand common English words, with unsuitable ones removed.
    Abstract,
    /// UK place names.
    Uk,
    /// Place names from the rest of the world.
    Worldwide,
}

/// Which of the word lists a password's word is taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordlistMode {
    /// Half of the time an abstract word, otherwise a UK or worldwide location.
    All,
    #[default]
    AbstractOnly,
    OnlyUk,
    OnlyWorldwide,
    AllLocations,
    NotAbstract,
}

impl WordlistMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::AbstractOnly => "abstract_words_only",
            Self::OnlyUk => "uk_only",
            Self::OnlyWorldwide => "worldwide_only",
            Self::AllLocations => "all_locations",
            Self::NotAbstract => "not_abstract",
        }
    }

    /// Picks the list to draw from, some modes pick it at random.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Wordlist {
        match self {
            Self::AbstractOnly => Wordlist::Abstract,
            Self::OnlyUk => Wordlist::Uk,
            Self::OnlyWorldwide => Wordlist::Worldwide,
            Self::All => {
                if rng.gen_bool(0.5) {
                    Wordlist::Abstract
                } else {
                    any_location(rng)
                }
            }
            Self::AllLocations | Self::NotAbstract => any_location(rng),
        }
    }
}

fn any_location<R: Rng + ?Sized>(rng: &mut R) -> Wordlist {
    if rng.gen_bool(0.5) {
        Wordlist::Uk
    } else {
        Wordlist::Worldwide
    }
}

impl fmt::Display for WordlistMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WordlistMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "abstract_words_only" => Ok(Self::AbstractOnly),
            "uk_only" => Ok(Self::OnlyUk),
            "worldwide_only" => Ok(Self::OnlyWorldwide),
            "all_locations" => Ok(Self::AllLocations),
            "not_abstract" => Ok(Self::NotAbstract),
            _ => Err(Error::InvalidConfiguration(format!(
                "wordlist mode not recognised: {s}"
            ))),
        }
    }
}

/// The three word lists a password's word is sampled from.
#[derive(Clone, Debug)]
pub struct WordSource {
    abstract_words: Vec<String>,
    uk_locations: Vec<String>,
    worldwide_locations: Vec<String>,
}

impl WordSource {
    /// Word lists supplied by the caller, any of them may be empty.
    pub fn new(
        abstract_words: Vec<String>,
        uk_locations: Vec<String>,
        worldwide_locations: Vec<String>,
    ) -> WordSource {
        WordSource {
            abstract_words,
            uk_locations,
            worldwide_locations,
        }
    }

    /// The word lists that ship with the library.
    pub fn builtin() -> WordSource {
        WordSource::new(
            parse_wordlist(ABSTRACT_WORDS),
            parse_wordlist(UK_LOCATIONS),
            parse_wordlist(WORLDWIDE_LOCATIONS),
        )
    }

    pub fn list(&self, wordlist: Wordlist) -> &[String] {
        match wordlist {
            Wordlist::Abstract => &self.abstract_words,
            Wordlist::Uk => &self.uk_locations,
            Wordlist::Worldwide => &self.worldwide_locations,
        }
    }

    /// Draws a word from `wordlist` that is at most `character_limit` characters long. A limit
    /// of 0 means no limit.
    ///
    /// At most `MAX_ATTEMPTS` draws are made, after that a word of `FALLBACK_LENGTH` random
    /// lowercase letters is returned instead, so this always terminates with a non-empty word.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        wordlist: Wordlist,
        character_limit: Option<usize>,
    ) -> String {
        let words = self.list(wordlist);
        let character_limit = character_limit.filter(|limit| *limit > 0);

        for _ in 0..MAX_ATTEMPTS {
            let word = match words.choose(rng) {
                Some(w) => w,
                None => break,
            };
            match character_limit {
                Some(limit) if word.chars().count() > limit => continue,
                _ => return word.clone(),
            }
        }

        log::debug!(
            "no word in {:?} list within limit {:?}, making one up",
            wordlist,
            character_limit
        );
        fallback_word(rng)
    }
}

impl Default for WordSource {
    fn default() -> Self {
        WordSource::builtin()
    }
}

fn parse_wordlist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn fallback_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..FALLBACK_LENGTH)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

#[cfg(test)]
#[path = "tests/words.rs"]
mod words_tests;
