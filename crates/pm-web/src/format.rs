//! Input formatters for price, phone and bank-card fields.
//!
//! These are pure string transforms; `enhance::inputs` wires them to DOM events.
//! A `None` result means "leave the field as the user typed it".

/// Maximum significant digits in a phone number after the country prefix.
const PHONE_DIGITS: usize = 10;
/// Maximum digits in a bank card number.
const CARD_DIGITS: usize = 16;
const CARD_GROUP: usize = 4;

/// Mask groups for a phone number: `(start, end, separator)` over the digit string.
/// A separator is only written once a digit follows it.
const PHONE_GROUPS: [(usize, usize, &str); 4] = [(0, 3, " ("), (3, 6, ") "), (6, 8, "-"), (8, 10, "-")];

/// Format a price to exactly two decimals.
///
/// Parses the longest numeric prefix the way a browser's `parseFloat` does, so
/// `"12abc"` becomes `"12.00"`. Returns `None` for input with no numeric prefix
/// or a non-finite value.
pub fn format_price(raw: &str) -> Option<String> {
    let value = parse_float_prefix(raw)?;
    if !value.is_finite() {
        return None;
    }
    Some(to_fixed_2(value))
}

/// Two-decimal rendering with `Number.prototype.toFixed` rounding: decided on
/// the exact binary value, ties away from zero. `-0` renders without a sign.
fn to_fixed_2(value: f64) -> String {
    // Enough places to print any finite f64 exactly
    let exact = format!("{:.1074}", value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return exact;
    };

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        round_up(&mut digits);
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    format!(
        "{}{}.{}",
        if value < 0.0 { "-" } else { "" },
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(cents)
    )
}

/// Add one to a decimal digit string, growing it on carry out of the top digit.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Format a Russian phone number as `+7 (XXX) XXX-XX-XX`.
///
/// Non-digits are stripped and a leading `7` or `8` country digit is dropped.
/// The mask grows with the digits typed so far. Returns `None` when the input
/// holds no digits at all.
pub fn format_phone(raw: &str) -> Option<String> {
    let mut digits = only_digits(raw);
    if digits.is_empty() {
        return None;
    }
    if digits.starts_with(['7', '8']) {
        digits.remove(0);
    }
    digits.truncate(PHONE_DIGITS);

    let mut formatted = String::from("+7");
    for (start, end, separator) in PHONE_GROUPS {
        if digits.len() <= start {
            break;
        }
        formatted.push_str(separator);
        formatted.push_str(&digits[start..end.min(digits.len())]);
    }
    Some(formatted)
}

/// Format a bank card number in groups of four, capped at 16 digits.
pub fn format_card(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(CARD_DIGITS).collect();
    digits
        .chunks(CARD_GROUP)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn only_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parse the longest leading decimal literal (`[+-]digits[.digits][e[+-]digits]`).
fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let mut literal = String::new();
    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        literal.push(sign as char);
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_part = &s[int_start..i];

    let mut frac_part = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_part = &s[frac_start..j];
        i = j;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits_start {
            literal.push_str(&s[i..j]);
        }
    }

    literal.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_whole_number() {
        assert_eq!(format_price("12").as_deref(), Some("12.00"));
    }

    #[test]
    fn test_price_pads_fraction() {
        assert_eq!(format_price("3.1").as_deref(), Some("3.10"));
    }

    #[test]
    fn test_price_rejects_non_numeric() {
        assert_eq!(format_price("abc"), None);
        assert_eq!(format_price(""), None);
        assert_eq!(format_price("."), None);
        assert_eq!(format_price("-"), None);
    }

    #[test]
    fn test_price_uses_numeric_prefix() {
        assert_eq!(format_price("  12abc").as_deref(), Some("12.00"));
        assert_eq!(format_price("1.5.7").as_deref(), Some("1.50"));
        assert_eq!(format_price(".5").as_deref(), Some("0.50"));
        assert_eq!(format_price("7.").as_deref(), Some("7.00"));
    }

    #[test]
    fn test_price_exponent() {
        assert_eq!(format_price("1e3").as_deref(), Some("1000.00"));
        // dangling exponent marker is ignored
        assert_eq!(format_price("2e").as_deref(), Some("2.00"));
    }

    #[test]
    fn test_price_rounds_and_signs() {
        assert_eq!(format_price("199.999").as_deref(), Some("200.00"));
        assert_eq!(format_price("-4.2").as_deref(), Some("-4.20"));
        assert_eq!(format_price("-0").as_deref(), Some("0.00"));
    }

    #[test]
    fn test_price_ties_round_away_from_zero() {
        // exactly representable halves
        assert_eq!(format_price("10.625").as_deref(), Some("10.63"));
        assert_eq!(format_price("0.125").as_deref(), Some("0.13"));
        assert_eq!(format_price("2.375").as_deref(), Some("2.38"));
        assert_eq!(format_price("-0.125").as_deref(), Some("-0.13"));
    }

    #[test]
    fn test_price_rounds_on_the_stored_value() {
        // stored just below the half
        assert_eq!(format_price("1.005").as_deref(), Some("1.00"));
        assert_eq!(format_price("9.995").as_deref(), Some("9.99"));
        // stored just above the half, carrying into a new digit
        assert_eq!(format_price("99.995").as_deref(), Some("100.00"));
        assert_eq!(format_price("-0.001").as_deref(), Some("-0.00"));
    }

    #[test]
    fn test_price_overflow_is_not_finite() {
        assert_eq!(format_price("1e400"), None);
    }

    #[test]
    fn test_phone_with_eight_prefix() {
        assert_eq!(format_phone("89991234567").as_deref(), Some("+7 (999) 123-45-67"));
    }

    #[test]
    fn test_phone_with_seven_prefix() {
        assert_eq!(format_phone("79991234567").as_deref(), Some("+7 (999) 123-45-67"));
    }

    #[test]
    fn test_phone_reformats_already_masked_value() {
        assert_eq!(format_phone("+7 (999) 123-45-67").as_deref(), Some("+7 (999) 123-45-67"));
    }

    #[test]
    fn test_phone_partial_input_grows_mask() {
        assert_eq!(format_phone("999").as_deref(), Some("+7 (999"));
        assert_eq!(format_phone("99").as_deref(), Some("+7 (99"));
        assert_eq!(format_phone("9991").as_deref(), Some("+7 (999) 1"));
        assert_eq!(format_phone("999123").as_deref(), Some("+7 (999) 123"));
        assert_eq!(format_phone("9991234").as_deref(), Some("+7 (999) 123-4"));
        assert_eq!(format_phone("999123456").as_deref(), Some("+7 (999) 123-45-6"));
    }

    #[test]
    fn test_phone_only_country_digit() {
        assert_eq!(format_phone("8").as_deref(), Some("+7"));
    }

    #[test]
    fn test_phone_caps_significant_digits() {
        assert_eq!(format_phone("8999123456789").as_deref(), Some("+7 (999) 123-45-67"));
    }

    #[test]
    fn test_phone_without_digits_is_untouched() {
        assert_eq!(format_phone(""), None);
        assert_eq!(format_phone("abc"), None);
    }

    #[test]
    fn test_card_groups_of_four() {
        assert_eq!(format_card("4111111111111111"), "4111 1111 1111 1111");
    }

    #[test]
    fn test_card_ignores_extra_digits() {
        assert_eq!(format_card("41111111111111119999"), "4111 1111 1111 1111");
    }

    #[test]
    fn test_card_partial_and_noise() {
        assert_eq!(format_card("4111-11"), "4111 11");
        assert_eq!(format_card("4111 1"), "4111 1");
        assert_eq!(format_card("no digits"), "");
    }
}
