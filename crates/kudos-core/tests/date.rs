use kudos_core::date::{format_date, month_name};
use kudos_core::error::CoreError;

#[test]
fn formats_february_date() {
    assert_eq!(format_date("23.02.2024").unwrap(), "23 февраля 2024 г.");
}

#[test]
fn every_month_maps_to_genitive_name() {
    let expected = [
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
    for (i, name) in expected.iter().enumerate() {
        let input = format!("10.{:02}.2025", i + 1);
        assert_eq!(format_date(&input).unwrap(), format!("10 {name} 2025 г."));
    }
}

#[test]
fn leading_zeros_are_dropped() {
    assert_eq!(format_date("05.03.2024").unwrap(), "5 марта 2024 г.");
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(format_date(" 1. 12 .2023").unwrap(), "1 декабря 2023 г.");
}

#[test]
fn month_zero_is_rejected() {
    assert!(matches!(
        format_date("01.00.2024"),
        Err(CoreError::DateFormat { .. })
    ));
}

#[test]
fn month_thirteen_is_rejected() {
    assert!(matches!(
        format_date("01.13.2024"),
        Err(CoreError::DateFormat { .. })
    ));
}

#[test]
fn non_numeric_components_are_rejected() {
    for input in ["ab.02.2024", "01.fe.2024", "01.02.20x4", "..", ""] {
        assert!(format_date(input).is_err(), "{input:?} should fail");
    }
}

#[test]
fn wrong_component_count_is_rejected() {
    assert!(format_date("23.02").is_err());
    assert!(format_date("23.02.2024.1").is_err());
    assert!(format_date("2024-02-23").is_err());
}

#[test]
fn error_message_names_the_input() {
    let err = format_date("32/01/2024").unwrap_err();
    assert_eq!(err.to_string(), "invalid date format: 32/01/2024");
}

#[test]
fn month_name_bounds() {
    assert_eq!(month_name(1), Some("января"));
    assert_eq!(month_name(12), Some("декабря"));
    assert_eq!(month_name(0), None);
    assert_eq!(month_name(-1), None);
    assert_eq!(month_name(13), None);
}
