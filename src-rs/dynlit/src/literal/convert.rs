//! Conversion rules for the coercion accessors.
//!
//! Each function is a pure, total probe: it either produces the exactly
//! converted value or reports that the conversion is impossible. Nothing
//! here rounds, wraps, or saturates.

use nom::{
    IResult, Parser as _,
    bytes::complete::take_while,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::preceded,
};

/// Accepted true spellings for the string-to-bool conversion.
const TRUE_TOKENS: [&str; 3] = ["true", "t", "1"];

/// Accepted false spellings for the string-to-bool conversion.
const FALSE_TOKENS: [&str; 3] = ["false", "f", "0"];

/// Converts a float to an integer.
///
/// Succeeds only when the value has no fractional component and lies
/// within the signed 64-bit range. NaN and the infinities fail.
pub(super) fn int_from_float(value: f64) -> Option<i64> {
    #[expect(
        clippy::float_cmp,
        clippy::float_cmp_const,
        reason = "an exact fractional-part test is the conversion rule: no rounding"
    )]
    if value.fract() != 0.0 {
        return None;
    }

    // -(2^63) converts exactly; 2^63 itself is the first value past the
    // signed range, so the upper bound is exclusive.
    #[expect(
        clippy::cast_precision_loss,
        reason = "i64::MIN is a power of two and widens exactly"
    )]
    let min = i64::MIN as f64;
    if value < min || value >= -min {
        return None;
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the fractional and range checks above make the cast exact"
    )]
    let converted = value as i64;
    Some(converted)
}

/// Recognizes integer-valued decimal text.
///
/// The grammar accepts an optional leading `-`, a run of ASCII digits, and
/// an optional fractional suffix that must consist of a `.` followed only
/// by `0` digits: `6`, `-6`, `6.`, `6.000`. The integer part is returned
/// as the parsed lexeme; the fractional suffix only has to be verified,
/// never kept.
fn integer_form(input: &str) -> IResult<&str, &str> {
    let (rest, lexeme) = recognize((opt(char('-')), digit1)).parse(input)?;
    let (rest, _) = opt(preceded(char('.'), take_while(|c: char| c == '0'))).parse(rest)?;
    Ok((rest, lexeme))
}

/// Converts integer-valued decimal text to an integer.
///
/// Fails on any text outside the [`integer_form`] grammar and on values
/// outside the signed 64-bit range: `"9223372036854775808"` is rejected,
/// not wrapped or saturated.
pub(super) fn int_from_str(text: &str) -> Option<i64> {
    let (_, lexeme) = all_consuming(integer_form).parse(text).ok()?;
    lexeme.parse::<i64>().ok()
}

/// Converts text to a float under `f64`'s standard grammar, which covers
/// decimal and scientific notation across the full finite range.
pub(super) fn float_from_str(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Converts an integer to a boolean; only 0 and 1 are unambiguous.
pub(super) const fn bool_from_int(value: i64) -> Option<bool> {
    match value {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

/// Converts text to a boolean by ASCII-case-insensitive token match.
pub(super) fn bool_from_str(text: &str) -> Option<bool> {
    if TRUE_TOKENS
        .iter()
        .any(|token| text.eq_ignore_ascii_case(token))
    {
        return Some(true);
    }

    if FALSE_TOKENS
        .iter()
        .any(|token| text.eq_ignore_ascii_case(token))
    {
        return Some(false);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    mod integer_form_tests {
        use super::*;

        #[test]
        fn test_plain_digits() {
            let (rest, lexeme) = integer_form("42").expect("should parse digits");
            assert_eq!(lexeme, "42");
            assert_eq!(rest, "");
        }

        #[test]
        fn test_negative() {
            let (rest, lexeme) = integer_form("-17").expect("should parse negative digits");
            assert_eq!(lexeme, "-17");
            assert_eq!(rest, "");
        }

        #[test]
        fn test_trailing_dot() {
            let (rest, lexeme) = integer_form("6.").expect("should parse trailing dot");
            assert_eq!(lexeme, "6");
            assert_eq!(rest, "");
        }

        #[test]
        fn test_zero_fraction() {
            let (rest, lexeme) = integer_form("6.0000").expect("should parse zero fraction");
            assert_eq!(lexeme, "6");
            assert_eq!(rest, "");
        }

        #[test]
        fn test_nonzero_fraction_stops_early() {
            // the fraction stops at the first nonzero digit, so the caller's
            // all_consuming wrapper rejects the overall text
            let (rest, lexeme) = integer_form("6.06").expect("should parse the integer part");
            assert_eq!(lexeme, "6");
            assert_eq!(rest, "6");
        }

        #[test]
        fn test_missing_integer_part() {
            assert!(integer_form(".0").is_err());
            assert!(integer_form(".23").is_err());
        }

        #[test]
        fn test_sign_alone() {
            assert!(integer_form("-").is_err());
        }

        #[test]
        fn test_plus_sign_rejected() {
            assert!(integer_form("+6").is_err());
        }

        #[test]
        fn test_empty_input() {
            assert!(integer_form("").is_err());
        }
    }

    mod int_from_str_tests {
        use super::*;

        #[test]
        fn test_accepts_integer_forms() {
            for (text, want) in [
                ("6", 6),
                ("6.", 6),
                ("6.0", 6),
                ("6.0000", 6),
                ("-6", -6),
                ("-6.", -6),
                ("-6.0", -6),
                ("007", 7),
            ] {
                assert_eq!(int_from_str(text), Some(want), "text: {text}");
            }
        }

        #[test]
        fn test_rejects_non_integer_forms() {
            for text in ["6.6", "6.06", ".0", ".23", "+6", "abc", "1e3", "6.0 ", ""] {
                assert_eq!(int_from_str(text), None, "text: {text}");
            }
        }

        #[test]
        fn test_range_boundaries() {
            assert_eq!(int_from_str("9223372036854775807"), Some(i64::MAX));
            assert_eq!(int_from_str("-9223372036854775808"), Some(i64::MIN));
            assert_eq!(int_from_str("9223372036854775808"), None);
            assert_eq!(int_from_str("-9223372036854775809"), None);
        }
    }

    mod int_from_float_tests {
        use super::*;

        #[test]
        fn test_integral_values_convert() {
            assert_eq!(int_from_float(6.0), Some(6));
            assert_eq!(int_from_float(-6.0), Some(-6));
            assert_eq!(int_from_float(0.0), Some(0));
        }

        #[test]
        fn test_fractional_values_fail() {
            assert_eq!(int_from_float(6.6), None);
            assert_eq!(int_from_float(-0.5), None);
        }

        #[test]
        fn test_non_finite_values_fail() {
            assert_eq!(int_from_float(f64::NAN), None);
            assert_eq!(int_from_float(f64::INFINITY), None);
            assert_eq!(int_from_float(f64::NEG_INFINITY), None);
        }

        #[test]
        fn test_range_boundaries() {
            // -(2^63) is representable in both types; 2^63 is not an i64
            #[expect(
                clippy::cast_precision_loss,
                reason = "i64::MIN is a power of two and widens exactly"
            )]
            let min = i64::MIN as f64;
            assert_eq!(int_from_float(min), Some(i64::MIN));
            assert_eq!(int_from_float(-min), None);
            assert_eq!(int_from_float(1e19), None);
        }
    }

    mod bool_tests {
        use super::*;

        #[test]
        fn test_int_conversion() {
            assert_eq!(bool_from_int(0), Some(false));
            assert_eq!(bool_from_int(1), Some(true));
            assert_eq!(bool_from_int(2), None);
            assert_eq!(bool_from_int(-1), None);
        }

        #[test]
        fn test_string_tokens_are_case_insensitive() {
            for text in ["true", "True", "TRUE", "t", "T", "1"] {
                assert_eq!(bool_from_str(text), Some(true), "text: {text}");
            }
            for text in ["false", "False", "FALSE", "f", "F", "0"] {
                assert_eq!(bool_from_str(text), Some(false), "text: {text}");
            }
        }

        #[test]
        fn test_other_strings_fail() {
            for text in ["bob", "yes", "no", "10", "", " true"] {
                assert_eq!(bool_from_str(text), None, "text: {text}");
            }
        }
    }
}
