//! Credit-weight (coefficient) parsing
//!
//! Coefficients come from free text. Text that does not yield a usable number
//! never raises an error: creation falls back to [`DEFAULT_COEFFICIENT`] and
//! edits keep the previous value.

/// Coefficient given to a new unit or course when none could be parsed.
pub const DEFAULT_COEFFICIENT: f64 = 1.0;

/// Parse the leading number of `raw`, the way a lenient form field does.
///
/// Leading whitespace is skipped and the longest numeric prefix is read, so
/// `"2.5 credits"` yields `2.5`. Text without a leading number, zero and
/// non-finite results all count as unparsable.
#[must_use]
pub fn parse_coefficient(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| is_usable(*v))
}

/// Pick `input` when it is a usable coefficient, `fallback` otherwise.
#[must_use]
pub fn resolve_coefficient(input: Option<f64>, fallback: f64) -> f64 {
    input.filter(|v| is_usable(*v)).unwrap_or(fallback)
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_coefficient("3"), Some(3.0));
        assert_eq!(parse_coefficient("1.5"), Some(1.5));
        assert_eq!(parse_coefficient("  2"), Some(2.0));
        assert_eq!(parse_coefficient(".5"), Some(0.5));
        assert_eq!(parse_coefficient("4."), Some(4.0));
        assert_eq!(parse_coefficient("-2"), Some(-2.0));
        assert_eq!(parse_coefficient("1e1"), Some(10.0));
    }

    #[test]
    fn reads_the_leading_number_only() {
        assert_eq!(parse_coefficient("2.5 credits"), Some(2.5));
        assert_eq!(parse_coefficient("3,5"), Some(3.0));
        assert_eq!(parse_coefficient("6e"), Some(6.0));
        assert_eq!(parse_coefficient("6e+x"), Some(6.0));
    }

    #[test]
    fn rejects_text_without_a_usable_number() {
        assert_eq!(parse_coefficient(""), None);
        assert_eq!(parse_coefficient("   "), None);
        assert_eq!(parse_coefficient("abc"), None);
        assert_eq!(parse_coefficient("."), None);
        assert_eq!(parse_coefficient("-"), None);
        assert_eq!(parse_coefficient("0"), None);
        assert_eq!(parse_coefficient("0.0"), None);
        assert_eq!(parse_coefficient("1e999"), None);
    }

    #[test]
    fn resolve_falls_back_on_missing_or_zero() {
        assert!((resolve_coefficient(Some(2.0), 1.0) - 2.0).abs() < f64::EPSILON);
        assert!((resolve_coefficient(None, 4.0) - 4.0).abs() < f64::EPSILON);
        assert!((resolve_coefficient(Some(0.0), 4.0) - 4.0).abs() < f64::EPSILON);
        assert!((resolve_coefficient(Some(f64::NAN), 1.0) - 1.0).abs() < f64::EPSILON);
    }
}
