use super::*;

use rand::{rngs::StdRng, SeedableRng};

#[test]
fn capitalise_none_leaves_word_alone() {
    let mut rng = StdRng::seed_from_u64(1);

    for word in ["able", "london", "ÅLESUND", ""] {
        assert_eq!(word, capitalise(&mut rng, word, CapitaliseMode::None));
    }
}

#[test]
fn capitalise_one_uppercases_exactly_one_letter() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..500 {
        let word = capitalise(&mut rng, "anniversary", CapitaliseMode::One);

        assert_eq!(1, word.chars().filter(|c| c.is_uppercase()).count());
        assert_eq!("anniversary", word.to_lowercase());
    }
}

#[test]
fn capitalise_one_reaches_every_position() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = [false; 4];

    for _ in 0..500 {
        let word = capitalise(&mut rng, "able", CapitaliseMode::One);
        let position = word.chars().position(|c| c.is_uppercase()).unwrap();
        seen[position] = true;
    }

    assert_eq!([true; 4], seen);
}

#[test]
fn capitalise_one_keeps_multibyte_characters_whole() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..100 {
        let word = capitalise(&mut rng, "åäö", CapitaliseMode::One);

        assert_eq!(3, word.chars().count());
        assert_eq!("åäö", word.to_lowercase());
    }
}

#[test]
fn capitalise_one_empty_word() {
    let mut rng = StdRng::seed_from_u64(5);

    assert_eq!("", capitalise(&mut rng, "", CapitaliseMode::One));
}

#[test]
fn capitalise_some_is_roughly_a_quarter() {
    let mut rng = StdRng::seed_from_u64(6);
    let word = "a".repeat(10_000);

    let result = capitalise(&mut rng, &word, CapitaliseMode::Some);
    let upper = result.chars().filter(|c| *c == 'A').count();

    assert_eq!(10_000, result.chars().count());
    assert!(upper > 2_000 && upper < 3_000, "got {upper} uppercase letters");
}

#[test]
fn capitalise_some_only_changes_case() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let word = capitalise(&mut rng, "agriculture", CapitaliseMode::Some);

        assert_eq!("agriculture", word.to_lowercase());
    }
}

#[test]
fn capitalise_mode_from_str() {
    assert_eq!(CapitaliseMode::None, "none".parse().unwrap());
    assert_eq!(CapitaliseMode::One, "One".parse().unwrap());
    assert_eq!(CapitaliseMode::Some, " some ".parse().unwrap());
}

#[test]
fn capitalise_mode_from_str_unknown() {
    let err = "all".parse::<CapitaliseMode>().unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn capitalise_mode_display_parses_back() {
    for mode in [CapitaliseMode::None, CapitaliseMode::One, CapitaliseMode::Some] {
        assert_eq!(mode, mode.to_string().parse().unwrap());
    }
}

#[test]
fn capitalise_keeps_characters_without_single_uppercase() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..100 {
        let word = capitalise(&mut rng, "ßß", CapitaliseMode::One);
        assert_eq!("ßß", word);

        let word = capitalise(&mut rng, "straße", CapitaliseMode::Some);
        assert_eq!(6, word.chars().count());
        assert!(word.contains('ß'));
    }
}
