//! Number formatting for prices and totals

/// Formats a number with a comma thousands separator and the given number of decimals
///
/// # Examples
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Comma every 3 digits from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" reads oddly next to a price list
    let sign = if grouped.chars().chain(decimal_part.unwrap_or("").chars()).all(|c| c == '0') {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with a dollar sign and 2 decimals, e.g. `$1,234.50`
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(30.0), "$30.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-12.5), "-$12.50");
        assert_eq!(format_money(-0.001), "$0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(100000.0, 0), "100,000");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1,234");
    }
}
