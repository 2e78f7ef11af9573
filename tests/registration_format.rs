use chrono::NaiveDate;

use cadastro::dates;
use cadastro::registration::{format_code, month_prefix};

#[test]
fn codes_are_zero_padded_to_four_digits() {
    assert_eq!(format_code(2024, 3, 1), "2024.03.0001");
    assert_eq!(format_code(2024, 3, 42), "2024.03.0042");
    assert_eq!(format_code(2024, 12, 9999), "2024.12.9999");
}

#[test]
fn sequence_widens_past_four_digits_without_truncation() {
    assert_eq!(format_code(2024, 3, 10000), "2024.03.10000");
}

#[test]
fn month_prefix_matches_code_format() {
    assert_eq!(month_prefix(2024, 3), "2024.03.");
    assert!(format_code(2024, 3, 7).starts_with(&month_prefix(2024, 3)));
}

#[test]
fn br_dates_parse_and_format() {
    let date = NaiveDate::from_ymd_opt(1985, 8, 7).unwrap();
    assert_eq!(dates::parse_br_date("07/08/1985"), Some(date));
    assert_eq!(dates::format_br_date(date), "07/08/1985");
}

#[test]
fn br_date_parsing_rejects_other_formats() {
    assert_eq!(dates::parse_br_date("1985-08-07"), None);
    assert_eq!(dates::parse_br_date("32/01/2020"), None);
    assert_eq!(dates::parse_br_date(""), None);
}

#[test]
fn br_date_parsing_trims_whitespace() {
    assert!(dates::parse_br_date("  07/08/1985 ").is_some());
}
