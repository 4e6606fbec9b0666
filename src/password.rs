use rand::{rngs::ThreadRng, Rng};

use crate::capitalise::{capitalise, CapitaliseMode};
pub use crate::error::{Error, Result};
use crate::number::numeric_token;
use crate::settings::Settings;
use crate::words::{WordSource, WordlistMode};

/// Generates passwords that are easy for humans to remember, like `ab725le` or `Le2843eds`.
///
/// The word lists have a UK bias. This is not meant for key material, any `Rng` with a good
/// spread will do and the default is `rand::thread_rng()`.
///
/// All operations take `&mut self`, a generator shared between threads needs to be wrapped in
/// a lock, or use one generator per thread.
pub struct MemorablePassword<R = ThreadRng> {
    settings: Settings,
    words: WordSource,
    rng: R,
}

impl MemorablePassword<ThreadRng> {
    pub fn new(
        num_digits: usize,
        capitalise_mode: CapitaliseMode,
        wordlist_mode: WordlistMode,
    ) -> MemorablePassword<ThreadRng> {
        MemorablePassword::with_rng(
            num_digits,
            capitalise_mode,
            wordlist_mode,
            rand::thread_rng(),
        )
    }
}

impl Default for MemorablePassword<ThreadRng> {
    fn default() -> Self {
        MemorablePassword::from_settings(&Settings::default(), rand::thread_rng())
    }
}

impl<R: Rng> MemorablePassword<R> {
    pub fn with_rng(
        num_digits: usize,
        capitalise_mode: CapitaliseMode,
        wordlist_mode: WordlistMode,
        rng: R,
    ) -> MemorablePassword<R> {
        MemorablePassword::from_settings(
            &Settings {
                num_digits,
                capitalise_mode,
                wordlist_mode,
            },
            rng,
        )
    }

    pub fn from_settings(settings: &Settings, rng: R) -> MemorablePassword<R> {
        MemorablePassword {
            settings: *settings,
            words: WordSource::builtin(),
            rng,
        }
    }

    /// Replaces the built in word lists.
    pub fn with_words(mut self, words: WordSource) -> MemorablePassword<R> {
        self.words = words;
        self
    }

    /// Returns a new password made from the current settings.
    ///
    /// Fails with `Error::DegenerateWord` if the chosen word is shorter than two characters,
    /// as the number must have at least one letter on each side.
    pub fn generate(&mut self) -> Result<String> {
        let word = self.get_word(None);
        let token = numeric_token(&mut self.rng, self.settings.num_digits);

        let count = word.chars().count();
        if count < 2 {
            return Err(Error::DegenerateWord(word));
        }
        let index = self.rng.gen_range(1..count);

        splice(&word, &token, index)
    }

    /// Returns a single capitalised word, for callers that build their own passwords.
    pub fn get_word(&mut self, character_limit: Option<usize>) -> String {
        let wordlist = self.settings.wordlist_mode.resolve(&mut self.rng);
        log::trace!(
            "drawing from {:?} for mode {}",
            wordlist,
            self.settings.wordlist_mode
        );

        let word = self.words.sample(&mut self.rng, wordlist, character_limit);
        capitalise(&mut self.rng, &word, self.settings.capitalise_mode)
    }

    pub fn set_capitalise_mode(&mut self, capitalise_mode: CapitaliseMode) {
        self.settings.capitalise_mode = capitalise_mode;
    }

    pub fn set_wordlist_mode(&mut self, wordlist_mode: WordlistMode) {
        self.settings.wordlist_mode = wordlist_mode;
    }

    pub fn set_num_digits(&mut self, num_digits: usize) {
        self.settings.num_digits = num_digits;
    }

    pub fn capitalise_mode(&self) -> CapitaliseMode {
        self.settings.capitalise_mode
    }

    pub fn wordlist_mode(&self) -> WordlistMode {
        self.settings.wordlist_mode
    }

    pub fn num_digits(&self) -> usize {
        self.settings.num_digits
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Inserts `token` into `word` just before the character at `index`.
///
/// `index` counts characters, not bytes, and must leave at least one character on each side.
pub fn splice(word: &str, token: &str, index: usize) -> Result<String> {
    let count = word.chars().count();
    if count < 2 {
        return Err(Error::DegenerateWord(word.to_owned()));
    }
    if index == 0 || index >= count {
        return Err(Error::Generic("insertion index outside of the word"));
    }

    let mut password = String::with_capacity(word.len() + token.len());
    for (i, c) in word.chars().enumerate() {
        if i == index {
            password.push_str(token);
        }
        password.push(c);
    }

    Ok(password)
}

#[cfg(test)]
#[path = "tests/password.rs"]
mod password_tests;
