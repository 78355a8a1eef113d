re!(re_year_first, r"^(\d{4})[/.-](\d{1,2})[/.-](\d{1,2})$");
re!(re_day_first, r"^(\d{1,2})[/.-](\d{1,2})[/.-](\d{2,4})$");
re!(re_day_month, r"^\d{1,2}[/.-]\d{1,2}$");
re!(re_full_date_prefix,
    r"^(\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}|\d{4}[/.-]\d{1,2}[/.-]\d{1,2})(?:\s|$)");

/// Rewrites a date token into `YYYY-MM-DD` (year-first input) or
/// `DD/MM/YYYY` (day-first input). Two-digit years are read as 20xx.
///
/// Unrecognised tokens come back unchanged. No calendar validation is done,
/// so `32/13/2024` passes through as written.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Some(c) = re_year_first().captures(raw) {
        return format!("{}-{:0>2}-{:0>2}", &c[1], &c[2], &c[3]);
    }

    if let Some(c) = re_day_first().captures(raw) {
        let year = &c[3];
        let year = if year.len() == 2 {
            format!("20{year}")
        } else {
            year.to_string()
        };
        return format!("{:0>2}/{:0>2}/{}", &c[1], &c[2], year);
    }

    raw.to_string()
}

/// Returns the date part of a token, if it has one.
///
/// A day-month-year or year-month-day date counts when it is the whole token
/// or is followed by whitespace (`05/01/2024 10:30`). A bare day-month only
/// counts as the whole token, so `Parcela 3/10` stays a description.
pub fn date_part(token: &str) -> Option<&str> {
    if re_day_month().is_match(token) {
        return Some(token);
    }
    re_full_date_prefix()
        .captures(token)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Resolves a date token for a row, filling in `year` when the token has
/// only day and month.
pub fn resolve_date(token: &str, year: i32) -> String {
    if re_day_month().is_match(token) {
        normalize_date(&format!("{token}/{year}"))
    } else {
        normalize_date(token)
    }
}
