use gastos_core::is_persistable;
use rust_decimal::Decimal;
use std::str::FromStr;

re!(re_currency_symbol, r"(?i)R\$|US\$|\$|€|£");
re!(re_leading_number, r"^(-?)(\d*)(?:\.(\d*))?");

/// Parses a statement amount written with either Brazilian (`1.234,56`) or
/// international (`1,234.56`) separators.
///
/// Returns `None` when the token is not numeric, e.g. `"Uber 123"`, or when
/// the amount is too large to be stored.
pub fn normalize_currency(raw: &str) -> Option<Decimal> {
    let without_symbols = re_currency_symbol().replace_all(raw, "");
    if without_symbols.chars().any(char::is_alphabetic) {
        return None;
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }

    let canonical = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => comma_as_decimal(&cleaned),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (None, Some(_)) => comma_as_decimal(&cleaned),
        (Some(_), None) => {
            let last_group = cleaned.rsplit('.').next().unwrap_or_default();
            if last_group.len() == 3 && last_group.chars().all(|c| c.is_ascii_digit()) {
                // "1.500" reads as fifteen hundred, not one and a half.
                cleaned.replace('.', "")
            } else {
                cleaned
            }
        }
        (None, None) => cleaned,
    };

    parse_leading_decimal(&canonical).filter(|v| is_persistable(*v))
}

/// Treats the last comma as the decimal point and drops every other
/// grouping character.
fn comma_as_decimal(s: &str) -> String {
    let without_dots = s.replace('.', "");
    match without_dots.rsplit_once(',') {
        Some((int_part, frac)) => format!("{}.{}", int_part.replace(',', ""), frac),
        None => without_dots,
    }
}

/// Reads the longest numeric prefix, ignoring trailing garbage such as a
/// second decimal point.
fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let caps = re_leading_number().captures(s)?;
    let sign = caps.get(1).map_or("", |m| m.as_str());
    let int_part = caps.get(2).map_or("", |m| m.as_str());
    let frac = caps.get(3).map_or("", |m| m.as_str());
    if int_part.is_empty() && frac.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let literal = if frac.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac}")
    };
    Decimal::from_str(&literal).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn brazilian_thousands_and_decimal() {
        assert_eq!(normalize_currency("1.234,56"), Some(dec("1234.56")));
        assert_eq!(normalize_currency("R$ 1.234.567,89"), Some(dec("1234567.89")));
    }

    #[test]
    fn international_thousands_and_decimal() {
        assert_eq!(normalize_currency("1,234.56"), Some(dec("1234.56")));
        assert_eq!(normalize_currency("US$ 1,234,567.89"), Some(dec("1234567.89")));
    }

    #[test]
    fn comma_only_is_decimal() {
        assert_eq!(normalize_currency("10,50"), Some(dec("10.50")));
        assert_eq!(normalize_currency("1,234,56"), Some(dec("1234.56")));
        // Only the last comma is decimal, even when it groups three digits.
        assert_eq!(normalize_currency("1,234,567"), Some(dec("1234.567")));
    }

    #[test]
    fn dot_only_three_digit_group_is_thousands() {
        assert_eq!(normalize_currency("1.500"), Some(dec("1500")));
        assert_eq!(normalize_currency("1.234.567"), Some(dec("1234567")));
    }

    #[test]
    fn dot_only_otherwise_is_decimal() {
        assert_eq!(normalize_currency("10.50"), Some(dec("10.50")));
        assert_eq!(normalize_currency("0.5"), Some(dec("0.5")));
        assert_eq!(normalize_currency("1.2345"), Some(dec("1.2345")));
    }

    #[test]
    fn plain_integers_and_negatives() {
        assert_eq!(normalize_currency("42"), Some(dec("42")));
        assert_eq!(normalize_currency("-25,00"), Some(dec("-25")));
        assert_eq!(normalize_currency("R$ -1.234,56"), Some(dec("-1234.56")));
        assert_eq!(normalize_currency("-R$ 99,90"), Some(dec("-99.90")));
    }

    #[test]
    fn currency_symbols_are_stripped() {
        assert_eq!(normalize_currency("r$ 10,00"), Some(dec("10")));
        assert_eq!(normalize_currency("€12,30"), Some(dec("12.30")));
        assert_eq!(normalize_currency("£ 7.25"), Some(dec("7.25")));
        assert_eq!(normalize_currency("$3"), Some(dec("3")));
    }

    #[test]
    fn letters_reject_the_token() {
        assert_eq!(normalize_currency("Uber 123"), None);
        assert_eq!(normalize_currency("12 parcelas"), None);
        assert_eq!(normalize_currency("ação"), None);
    }

    #[test]
    fn nothing_numeric_rejects() {
        assert_eq!(normalize_currency(""), None);
        assert_eq!(normalize_currency("-"), None);
        assert_eq!(normalize_currency("R$"), None);
        assert_eq!(normalize_currency("***"), None);
        assert_eq!(normalize_currency("--5"), None);
        assert_eq!(normalize_currency("."), None);
    }

    #[test]
    fn amounts_that_cannot_be_stored_are_rejected() {
        assert_eq!(normalize_currency("79228162514264337593543950335"), None);
        assert_eq!(normalize_currency("-79.228.162.514.264.337.593.543.950.335"), None);
        assert_eq!(normalize_currency("99.999.999.999,99"), Some(dec("99999999999.99")));
    }

    #[test]
    fn trailing_garbage_after_number_is_ignored() {
        assert_eq!(normalize_currency("1.2.3"), Some(dec("1.2")));
        assert_eq!(normalize_currency("12-3"), Some(dec("12")));
    }

    #[test]
    fn dates_parse_as_numbers_too() {
        // Role inference removes the date token before scanning for amounts.
        assert_eq!(normalize_currency("05/01/2024"), Some(dec("5012024")));
    }
}
