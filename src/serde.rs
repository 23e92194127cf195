use serde::{Deserialize, Deserializer};

/// Parses the leading integer of `value`, ignoring surrounding whitespace and
/// anything after the digits (`"500.75"` is `500`, `"12 seats"` is `12`).
/// Returns `None` when `value` does not start with a (signed) digit.
pub fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// Parses the leading decimal number of `value` (e.g. `"12.5kg"` is `12.5`).
pub fn parse_float(value: &str) -> Option<f64> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        end += 1 + fraction;
    }
    if integer + fraction == 0 {
        return None;
    }
    value[..end].parse().ok()
}

/// Parses an amount of money such as `£1,234.50`, dropping the currency
/// symbol and thousands separators.
pub fn parse_currency(value: &str) -> Option<f64> {
    parse_float(&value.replace(['£', ','], ""))
}

/// Deserializes a field with [`parse_int`], defaulting to zero.
pub fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(parse_int(&value).unwrap_or(0))
}

/// Deserializes a field with [`parse_currency`], defaulting to zero.
pub fn currency<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(parse_currency(&value).unwrap_or(0.0))
}
