use jiff::civil::Date;

/// Parse a money cell: `1250`, `$1,250.00`, `(12.50)` for negatives.
///
/// Returns `None` for blank cells and anything that is not a number.
pub fn parse_money(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (negative, body) = match trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, trimmed),
    };

    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Parse a date cell in `YYYY-MM-DD`, `MM/DD/YYYY` or `YYYYMMDD` form.
pub fn parse_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains('/') {
        let mut parts = trimmed.split('/');
        let month: i8 = parts.next()?.trim().parse().ok()?;
        let day: i8 = parts.next()?.trim().parse().ok()?;
        let year = parts.next()?.trim();
        // Two-digit years are ambiguous.
        if year.len() != 4 {
            return None;
        }
        let year: i16 = year.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        return Date::new(year, month, day).ok();
    }

    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let year: i16 = trimmed[..4].parse().ok()?;
        let month: i8 = trimmed[4..6].parse().ok()?;
        let day: i8 = trimmed[6..].parse().ok()?;
        return Date::new(year, month, day).ok();
    }

    trimmed.parse::<Date>().ok()
}

/// Trimmed cell text, or `None` when blank.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
