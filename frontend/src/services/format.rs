/// Format a dollar amount as whole dollars with thousands separators,
/// sign dropped (callers decide how to show negatives)
pub fn format_whole_dollars(value: f64) -> String {
    let digits = (value.round().abs() as i64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar display with the sign in front of the currency symbol
pub fn signed_dollars(value: f64) -> String {
    if value.round() < 0.0 {
        format!("-${}", format_whole_dollars(value))
    } else {
        format!("${}", format_whole_dollars(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_land_every_three_digits() {
        assert_eq!(format_whole_dollars(0.0), "0");
        assert_eq!(format_whole_dollars(999.0), "999");
        assert_eq!(format_whole_dollars(1234.0), "1,234");
        assert_eq!(format_whole_dollars(1234567.0), "1,234,567");
    }

    #[test]
    fn values_are_rounded_to_whole_dollars() {
        assert_eq!(format_whole_dollars(1234.6), "1,235");
        assert_eq!(format_whole_dollars(1234.4), "1,234");
    }

    #[test]
    fn sign_is_dropped() {
        assert_eq!(format_whole_dollars(-1234.0), "1,234");
    }

    #[test]
    fn signed_display_keeps_the_sign_outside_the_symbol() {
        assert_eq!(signed_dollars(2500.0), "$2,500");
        assert_eq!(signed_dollars(-2500.0), "-$2,500");
        assert_eq!(signed_dollars(-0.4), "$0");
    }
}
