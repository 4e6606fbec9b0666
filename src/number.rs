use rand::Rng;

/// Builds the numeric part of a password: exactly `num_digits` digits, none of them 0 or 1 so
/// they can't be mistaken for O, l or I.
///
/// Every position is first drawn from 0..=9, which is the same as drawing a zero padded number
/// below 10^num_digits, and any 0 or 1 is then replaced with a fresh draw from 2..=9.
pub fn numeric_token<R: Rng + ?Sized>(rng: &mut R, num_digits: usize) -> String {
    (0..num_digits)
        .map(|_| {
            let digit = match rng.gen_range(0..=9u8) {
                0 | 1 => rng.gen_range(2..=9u8),
                d => d,
            };
            (b'0' + digit) as char
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/number.rs"]
mod number_tests;
