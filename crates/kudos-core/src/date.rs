use crate::error::CoreError;

/// Russian month names in the genitive case, indexed by `month - 1`.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Format a `DD.MM.YYYY` date the way it is printed under the signature,
/// e.g. `23.02.2024` → `23 февраля 2024 г.`.
///
/// Day and year are printed as plain integers, so leading zeros are dropped.
/// The day is not range-checked; the month must be 1–12.
pub fn format_date(input: &str) -> Result<String, CoreError> {
    let invalid = || CoreError::DateFormat {
        input: input.to_string(),
    };

    let mut parts = input.split('.');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let day = parse_component(day).ok_or_else(invalid)?;
    let month = parse_component(month).ok_or_else(invalid)?;
    let year = parse_component(year).ok_or_else(invalid)?;

    let month_name = month_name(month).ok_or_else(invalid)?;
    Ok(format!("{day} {month_name} {year} г."))
}

/// Genitive month name for a 1-based month number.
pub fn month_name(month: i64) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTHS_GENITIVE.get(index).copied()
}

fn parse_component(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
