use lazy_static::lazy_static;
use regex::Regex;

/// Upper bound used when a requirement has no maximum
pub const OPEN_ENDED_MAX_YEARS: u32 = 99;

lazy_static! {
    /// Runs of Unicode decimal digits (`Nd`), not just ASCII
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").expect("digit pattern is valid");
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").expect("digit pattern is valid");
}

/// Parse a free-text experience requirement into `(min_years, max_years)`
///
/// Handles "0-2 years", "2-5 yrs", "5+ years", "3 years" and any surrounding
/// text. Never fails:
/// - no digits: `(0, 99)`
/// - one number: `(n, 99)` when the text contains `+`, otherwise `(n, n)`
/// - two or more numbers: the first two, in order
pub fn parse_experience_range(text: &str) -> (u32, u32) {
    let mut numbers = DIGIT_RUN
        .find_iter(text)
        .map(|m| digit_run_value(m.as_str()));

    match (numbers.next(), numbers.next()) {
        (None, _) => (0, OPEN_ENDED_MAX_YEARS),
        (Some(only), None) if text.contains('+') => (only, OPEN_ENDED_MAX_YEARS),
        (Some(only), None) => (only, only),
        (Some(min), Some(max)) => (min, max),
    }
}

/// Numeric value of a digit run; saturates at `u32::MAX` on overflow
fn digit_run_value(run: &str) -> u32 {
    run.chars()
        .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(decimal_value(c)))
        .unwrap_or(u32::MAX)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of one `Nd` character
///
/// Unicode lays decimal digits out in contiguous blocks of ten, zero first,
/// so the value is the offset from the start of the surrounding digit block
/// modulo ten.
fn decimal_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    (c as u32 - start) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(parse_experience_range("0-2 years"), (0, 2));
        assert_eq!(parse_experience_range("2-5 yrs"), (2, 5));
        assert_eq!(parse_experience_range("1 to 3 years of experience"), (1, 3));
    }

    #[test]
    fn test_open_ended() {
        assert_eq!(parse_experience_range("5+ years"), (5, 99));
        assert_eq!(parse_experience_range("at least +3"), (3, 99));
    }

    #[test]
    fn test_exact() {
        assert_eq!(parse_experience_range("3 years"), (3, 3));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_experience_range(""), (0, 99));
        assert_eq!(parse_experience_range("fresher welcome"), (0, 99));
    }

    #[test]
    fn test_extra_numbers_ignored() {
        assert_eq!(parse_experience_range("2-4 years, 1 year in Go"), (2, 4));
    }

    #[test]
    fn test_non_ascii_digits() {
        assert_eq!(parse_experience_range("\u{0663} years"), (3, 3));
        assert_eq!(parse_experience_range("\u{FF12}-\u{FF15} years"), (2, 5));
        assert_eq!(parse_experience_range("\u{0967}\u{0966}+ years"), (10, 99));
        // mathematical digits sit in five adjacent blocks of ten
        assert_eq!(parse_experience_range("\u{1D7D0}-\u{1D7E3} years"), (2, 1));
    }

    #[test]
    fn test_non_ascii_range_scores_in_range() {
        use crate::core::scoring::score_experience;
        assert_eq!(score_experience(3, "\u{FF12}-\u{FF15} years"), 100.0);
    }

    #[test]
    fn test_oversized_number_saturates() {
        assert_eq!(
            parse_experience_range("99999999999 years"),
            (u32::MAX, u32::MAX)
        );
    }
}
