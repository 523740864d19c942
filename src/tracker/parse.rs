//! Lenient number parsing for form text
//!
//! Form inputs are accepted as typed. The longest numeric prefix wins
//! (`"150g"` reads as 150) and text without one reads as NaN, which then
//! propagates into totals rather than rejecting the entry.

/// Parse the longest numeric prefix of `input`, NaN if there is none
pub fn parse_number(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render a number the way it is shown back in an input box
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("150"), 150.0);
        assert_eq!(parse_number("1.3"), 1.3);
        assert_eq!(parse_number("0.027"), 0.027);
        assert_eq!(parse_number("-2.5"), -2.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("  42"), 42.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("2.5E-1"), 0.25);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_number("150g"), 150.0);
        assert_eq!(parse_number("1.3 kcal"), 1.3);
        assert_eq!(parse_number("3e"), 3.0);
        assert_eq!(parse_number("3e+"), 3.0);
        assert_eq!(parse_number("1.2.3"), 1.2);
    }

    #[test]
    fn test_invalid_is_nan() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("NaN").is_nan());
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(150.0), "150");
        assert_eq!(display_number(1.3), "1.3");
        assert_eq!(display_number(f64::NAN), "NaN");
        assert_eq!(display_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(parse_number(&display_number(0.027)), 0.027);
    }
}
