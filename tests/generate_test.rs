extern crate memorable_password;

use memorable_password::{
    CapitaliseMode, Error, MemorablePassword, WordSource, Wordlist, WordlistMode,
};
use rand::{rngs::StdRng, SeedableRng};

fn is_listed(words: &WordSource, word: &str) -> bool {
    [Wordlist::Abstract, Wordlist::Uk, Wordlist::Worldwide]
        .iter()
        .any(|list| words.list(*list).iter().any(|w| w.eq_ignore_ascii_case(word)))
}

// Every mode produces a listed word with three digits in it
#[test]
fn generate_every_wordlist_mode() {
    let words = WordSource::builtin();
    let modes = [
        WordlistMode::All,
        WordlistMode::AbstractOnly,
        WordlistMode::OnlyUk,
        WordlistMode::OnlyWorldwide,
        WordlistMode::AllLocations,
        WordlistMode::NotAbstract,
    ];

    for mode in modes {
        let mut generator = MemorablePassword::with_rng(
            3,
            CapitaliseMode::Some,
            mode,
            StdRng::seed_from_u64(1),
        );

        for _ in 0..50 {
            let password = generator.generate().unwrap();
            let word: String = password.chars().filter(|c| !c.is_ascii_digit()).collect();

            assert_eq!(3, password.chars().filter(|c| c.is_ascii_digit()).count());
            assert!(is_listed(&words, &word), "{word} isn't in any list");
        }
    }
}

#[test]
fn generate_with_thread_rng() {
    let mut generator = MemorablePassword::new(4, CapitaliseMode::One, WordlistMode::All);

    let password = generator.generate().unwrap();

    assert!(password.len() >= 4 + 3);
}

// Words built from get_word can be combined with splice by callers
#[test]
fn external_password_building() {
    let mut generator = MemorablePassword::with_rng(
        3,
        CapitaliseMode::None,
        WordlistMode::OnlyUk,
        StdRng::seed_from_u64(2),
    );

    let word = generator.get_word(Some(6));
    assert!(word.chars().count() <= 6);

    let password = memorable_password::splice(&word, "42", 1).unwrap();
    assert_eq!(word.len() + 2, password.len());
}

#[test]
fn degenerate_words_are_reported() {
    let mut generator = MemorablePassword::with_rng(
        3,
        CapitaliseMode::None,
        WordlistMode::AbstractOnly,
        StdRng::seed_from_u64(3),
    )
    .with_words(WordSource::new(vec!["x".to_owned()], vec![], vec![]));

    let err = generator.generate().unwrap_err();

    assert!(matches!(err, Error::DegenerateWord(_)));
    assert_eq!(
        "the word 'x' is too short to insert a number into",
        err.to_string()
    );
}
