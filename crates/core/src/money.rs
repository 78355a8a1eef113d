use rust_decimal::Decimal;

/// Formats a value the way Brazilian statements print it: `R$ 1.234,56`,
/// with a leading minus for negatives.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn formats_thousands_and_cents() {
        assert_eq!(format_brl(dec("1234.56")), "R$ 1.234,56");
        assert_eq!(format_brl(dec("1234567.8")), "R$ 1.234.567,80");
    }

    #[test]
    fn formats_small_values() {
        assert_eq!(format_brl(dec("0")), "R$ 0,00");
        assert_eq!(format_brl(dec("5")), "R$ 5,00");
        assert_eq!(format_brl(dec("999.999")), "R$ 1.000,00");
    }

    #[test]
    fn formats_negatives_with_leading_minus() {
        assert_eq!(format_brl(dec("-25")), "-R$ 25,00");
        assert_eq!(format_brl(dec("-0.001")), "R$ 0,00");
    }
}
