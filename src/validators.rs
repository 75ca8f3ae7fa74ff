//! Ready-made input predicates for prompts.
//!
//! Each function fits [`Acceptance::predicate`](crate::prompt::Acceptance::predicate).

use crate::prompt::Acceptance;
use std::str::FromStr;

/// True when `input` parses as `T`.
pub fn parses_as<T: FromStr>(input: &str) -> bool {
    input.parse::<T>().is_ok()
}

/// Signed 64-bit integer, e.g. `-12`.
pub fn is_integer(input: &str) -> bool {
    parses_as::<i64>(input)
}

/// One or more ASCII digits and nothing else.
pub fn is_unsigned(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Finite floating-point number. `NaN` and infinities are rejected.
pub fn is_float(input: &str) -> bool {
    input.parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn non_empty(input: &str) -> bool {
    !input.is_empty()
}

/// Integer within `min..=max`.
pub fn in_range(min: i64, max: i64) -> impl Fn(&str) -> bool {
    move |input| input.parse::<i64>().is_ok_and(|n| (min..=max).contains(&n))
}

/// Named validator selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ValidatorKind {
    Integer,
    Unsigned,
    Float,
    NonEmpty,
}

impl ValidatorKind {
    pub fn acceptance(self) -> Acceptance {
        match self {
            Self::Integer => Acceptance::predicate(is_integer),
            Self::Unsigned => Acceptance::predicate(is_unsigned),
            Self::Float => Acceptance::predicate(is_float),
            Self::NonEmpty => Acceptance::predicate(non_empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_requires_digits_only() {
        assert!(is_unsigned("34"));
        assert!(is_unsigned("007"));
        assert!(!is_unsigned("12a"));
        assert!(!is_unsigned("-1"));
        assert!(!is_unsigned(""));
    }

    #[test]
    fn integer_accepts_sign() {
        assert!(is_integer("-12"));
        assert!(is_integer("+5"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer("99999999999999999999"));
    }

    #[test]
    fn float_rejects_non_finite() {
        assert!(is_float("3.25"));
        assert!(is_float("-1e3"));
        assert!(!is_float("NaN"));
        assert!(!is_float("inf"));
        assert!(!is_float("abc"));
    }

    #[test]
    fn in_range_is_inclusive() {
        let dice = in_range(1, 6);
        assert!(dice("1"));
        assert!(dice("6"));
        assert!(!dice("0"));
        assert!(!dice("seven"));
    }

    #[test]
    fn parses_as_generic_types() {
        assert!(parses_as::<u8>("255"));
        assert!(!parses_as::<u8>("256"));
        assert!(parses_as::<bool>("true"));
    }

    #[test]
    fn kinds_map_to_matching_predicates() {
        assert!(ValidatorKind::Unsigned.acceptance().accepts("42"));
        assert!(!ValidatorKind::Unsigned.acceptance().accepts("4 2"));
        assert!(ValidatorKind::NonEmpty.acceptance().accepts("x"));
        assert!(!ValidatorKind::NonEmpty.acceptance().accepts(""));
        assert!(ValidatorKind::Float.acceptance().accepts("0.5"));
        assert!(ValidatorKind::Integer.acceptance().accepts("-3"));
    }
}
