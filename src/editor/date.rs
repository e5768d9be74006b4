//! Month/year display strings

use chrono::{Datelike as _, NaiveDate};

/// Month names used for display dates, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// `YYYY-MM` for a date
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// `{Month} {Year}` for a date
#[must_use]
pub fn display_for(date: NaiveDate) -> String {
    let month = MONTH_NAMES
        .get(date.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("{month} {}", date.format("%Y"))
}

/// Suggested display string for a `YYYY-MM` value
///
/// Anything that isn't a year and a month from 1 to 12 separated by a
/// single `-` falls back to `today`'s display string.
#[must_use]
pub fn suggest_display(date: &str, today: NaiveDate) -> String {
    parse_month(date)
        .map(|(year, month)| format!("{month} {year}"))
        .unwrap_or_else(|| display_for(today))
}

fn parse_month(date: &str) -> Option<(&str, &'static str)> {
    let (year, month) = date.split_once('-')?;
    if year.is_empty() || month.contains('-') {
        return None;
    }
    let number: usize = month.trim().parse().ok()?;
    let name = MONTH_NAMES.get(number.checked_sub(1)?)?;
    Some((year, name))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_month_key_and_display() {
        assert_eq!(month_key(today()), "2026-10");
        assert_eq!(display_for(today()), "Outubro 2026");
        let march = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(display_for(march), "Março 2025");
    }

    #[test]
    fn test_suggest_from_valid_month() {
        assert_eq!(suggest_display("2025-01", today()), "Janeiro 2025");
        assert_eq!(suggest_display("2024-12", today()), "Dezembro 2024");
        assert_eq!(suggest_display("2024-7", today()), "Julho 2024");
    }

    #[test]
    fn test_suggest_falls_back_to_today() {
        for bad in ["2025-13", "2025-00", "2025-xx", "2025", "", "-05", "2025-01-02"] {
            assert_eq!(suggest_display(bad, today()), "Outubro 2026", "input {bad:?}");
        }
    }
}
