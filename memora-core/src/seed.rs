use lazy_static::lazy_static;
use regex::Regex;

/// Seed used when an identifier carries no digits
pub const DEFAULT_SEED: u64 = 123_456;

const MAX_SEED_DIGITS: usize = 6;

lazy_static! {
    static ref DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
}

/// Derive a generator seed from the first six digits found in `id`.
///
/// `"validator_0042"` yields `42`, `"mem_1234567"` yields `123456`, and an
/// identifier without digits falls back to [`DEFAULT_SEED`]. All-zero digits
/// (`"mem_000"`) give seed 0.
pub fn extract_seed(id: &str) -> u64 {
    let digits: String = DIGIT
        .find_iter(id)
        .take(MAX_SEED_DIGITS)
        .map(|m| m.as_str())
        .collect();

    // At most six ASCII digits always fit in a u64.
    digits.parse().unwrap_or(DEFAULT_SEED)
}
