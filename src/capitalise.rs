use std::{fmt, str::FromStr};

use rand::Rng;

pub use crate::error::{Error, Result};

/// How many letters of the chosen word get uppercased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapitaliseMode {
    /// The word is left as it is.
    #[default]
    None,
    /// Exactly one position, picked uniformly.
    One,
    /// Every position independently, with a one in four chance.
    Some,
}

impl CapitaliseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::One => "one",
            Self::Some => "some",
        }
    }
}

impl fmt::Display for CapitaliseMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CapitaliseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "one" => Ok(Self::One),
            "some" => Ok(Self::Some),
            _ => Err(Error::InvalidConfiguration(format!(
                "capitalise mode not recognised: {s}"
            ))),
        }
    }
}

/// Changes the casing of `word` according to `mode`. Works on characters, not bytes.
pub fn capitalise<R: Rng + ?Sized>(rng: &mut R, word: &str, mode: CapitaliseMode) -> String {
    match mode {
        CapitaliseMode::None => word.to_owned(),
        CapitaliseMode::One => capitalise_one(rng, word),
        CapitaliseMode::Some => capitalise_some(rng, word),
    }
}

fn capitalise_one<R: Rng + ?Sized>(rng: &mut R, word: &str) -> String {
    let count = word.chars().count();
    if count == 0 {
        return String::new();
    }

    let position = rng.gen_range(0..count);
    let mut result = String::with_capacity(word.len());
    for (i, c) in word.chars().enumerate() {
        if i == position {
            result.push(uppercase_char(c));
        } else {
            result.push(c);
        }
    }
    result
}

fn capitalise_some<R: Rng + ?Sized>(rng: &mut R, word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    for c in word.chars() {
        // one in four
        if rng.gen_range(0..4) == 0 {
            result.push(uppercase_char(c));
        } else {
            result.push(c);
        }
    }
    result
}

/// The uppercase form of `c`, or `c` itself when that form isn't a single character (ß -> SS).
fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
#[path = "tests/capitalise.rs"]
mod capitalise_tests;
