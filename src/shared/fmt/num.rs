//! Number formatting utilities for human-readable display.
//!
//! en-US conventions: comma thousands separators, `$` prefix, sign before the
//! currency symbol (`-$1,234.50`).

/// Inserts thousands separators into a string of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    digits
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>()
}

/// Fixed-point rendering with thousands separators, keeping between
/// `min_frac` and `max_frac` fractional digits (trailing zeros beyond
/// `min_frac` are trimmed). The sign is not included.
fn grouped_abs(value: f64, min_frac: usize, max_frac: usize) -> String {
    let max_frac = max_frac.max(min_frac);
    let formatted = format!("{:.1$}", value.abs(), max_frac);

    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (formatted, String::new()),
    };

    let mut frac = frac_part;
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let int_part = group_thousands(&int_part);
    if frac.is_empty() {
        int_part
    } else {
        format!("{}.{}", int_part, frac)
    }
}

/// Format a number with thousands separators and bounded fractional digits.
pub fn format_number(value: f64, min_frac: usize, max_frac: usize) -> String {
    let body = grouped_abs(value, min_frac, max_frac);
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format a USD amount, e.g. `format_usd(1234.5, 2, 6) == "$1,234.50"`.
pub fn format_usd(value: f64, min_frac: usize, max_frac: usize) -> String {
    if !value.is_finite() {
        return "$—".to_string();
    }
    let body = grouped_abs(value, min_frac, max_frac);
    if value < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Default price format: 2–6 fractional digits.
pub fn format_price(value: f64) -> String {
    format_usd(value, 2, 6)
}

/// Exactly two fractional digits (analytics and ML cards).
pub fn format_price_2(value: f64) -> String {
    format_usd(value, 2, 2)
}

/// 2–4 fractional digits (top movers list).
pub fn format_price_4(value: f64) -> String {
    format_usd(value, 2, 4)
}

/// Signed percentage with two decimals: `+1.23%`, `-4.50%`, `+0.00%`.
pub fn format_percent_change(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{:.2}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("1234567890"), "1,234,567,890");
    }

    #[test]
    fn test_format_price_keeps_two_digits_minimum() {
        assert_eq!(format_price(100.0), "$100.00");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(43250.12), "$43,250.12");
    }

    #[test]
    fn test_format_price_up_to_six_digits() {
        assert_eq!(format_price(0.123456), "$0.123456");
        assert_eq!(format_price(0.1234567), "$0.123457");
        assert_eq!(format_price(0.45), "$0.45");
    }

    #[test]
    fn test_format_price_2_rounds() {
        assert_eq!(format_price_2(1.236), "$1.24");
        assert_eq!(format_price_2(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_price_4() {
        assert_eq!(format_price_4(0.38768), "$0.3877");
        assert_eq!(format_price_4(2.5), "$2.50");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_usd(-1234.5, 2, 2), "-$1,234.50");
        assert_eq!(format_number(-1234.5, 0, 1), "-1,234.5");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_price(f64::NAN), "$—");
    }

    #[test]
    fn test_format_percent_change() {
        assert_eq!(format_percent_change(1.234), "+1.23%");
        assert_eq!(format_percent_change(0.0), "+0.00%");
        assert_eq!(format_percent_change(-4.5), "-4.50%");
    }
}
