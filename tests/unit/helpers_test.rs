//! Tests for the string, conversion, date, validation and test-data helpers

use chrono::{DateTime, TimeZone, Utc};
use elfproef::core::convert::{self, NameValue};
use elfproef::core::dates::{self, Comparison};
use elfproef::core::{strings, validation};
use elfproef::datagen;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

// =============================================================================
// STRINGS
// =============================================================================

#[test]
fn test_pad_short_identifier() {
    let padded = strings::pad_left("1855013", 9, '0');
    assert_eq!(padded, "001855013");
    assert!(elfproef::validate(&padded));
}

#[test]
fn test_remove_diacritics_keeps_length_in_chars() {
    let folded = strings::remove_diacritics("Hélène Ørsted");
    assert_eq!(folded, "Helene Orsted");
    assert_eq!(strings::utf8_length(&folded), folded.chars().count());
}

#[test]
fn test_decode_invalid_utf8_is_lossy() {
    assert_eq!(strings::decode_utf8(&[b'a', 0xff, b'b']), "a\u{fffd}b");
}

#[test]
fn test_capitalize_and_trim() {
    assert_eq!(
        strings::capitalize_first(strings::safe_trim(Some("  utrecht "))),
        "Utrecht"
    );
}

// =============================================================================
// DATES
// =============================================================================

#[test]
fn test_parse_rfc3339_with_offset() {
    let date = dates::parse_date("2024-03-01T10:00:00+01:00").unwrap();
    assert_eq!(date, at(2024, 3, 1, 9));
    assert_eq!(dates::format_date(date), "2024-03-01");
}

#[test]
fn test_parse_garbage_is_unparseable() {
    let err = dates::parse_date("morgen").unwrap_err();
    assert!(matches!(err, dates::DateError::Unparseable(ref s) if s == "morgen"));
}

#[test]
fn test_compare_to_now_plus_days() {
    let now = at(2024, 3, 1, 12);
    let due = at(2024, 3, 8, 12);
    assert!(dates::compare_to_now_plus_days(due, 7, now, Comparison::Equal).unwrap());
    assert!(dates::compare_to_now_plus_days(due, 7, now, Comparison::LessOrEqual).unwrap());
    assert!(dates::compare_to_now_plus_days(due, 7, now, Comparison::GreaterOrEqual).unwrap());
    assert!(!dates::compare_to_now_plus_days(due, 7, now, Comparison::Less).unwrap());
    assert!(dates::compare_to_now_plus_days(due, 6, now, Comparison::Greater).unwrap());
    assert!(dates::compare_to_now_plus_days(due, -1, now, Comparison::Greater).unwrap());
}

#[test]
fn test_before_after() {
    let early = at(2024, 3, 1, 0);
    let late = at(2024, 3, 1, 1);
    assert!(dates::is_before(early, late));
    assert!(dates::is_after(late, early));
    assert!(!dates::is_before(early, early));
}

#[test]
fn test_add_and_subtract_cross_leap_day() {
    let date = at(2024, 2, 28, 6);
    assert_eq!(dates::add_days(date, 2).unwrap(), at(2024, 3, 1, 6));
    assert_eq!(dates::subtract_days(at(2024, 3, 1, 6), 2).unwrap(), date);
}

#[test]
fn test_from_unix_out_of_range() {
    assert!(dates::from_unix(i64::MAX).is_err());
    assert_eq!(dates::to_unix(dates::from_unix(0).unwrap()), 0);
}

// =============================================================================
// CONVERSIONS
// =============================================================================

#[test]
fn test_string_to_number_rejects_text() {
    assert_eq!(convert::string_to_number(Some("12,5")), None);
    assert_eq!(convert::string_to_number(Some("abc")), None);
    assert_eq!(convert::string_to_number(Some("inf")), None);
    assert_eq!(convert::string_to_number(Some("-0.5")), Some(-0.5));
}

#[test]
fn test_nvp_helpers() {
    let filled = NameValue {
        name: "Amsterdam".to_string(),
        value: "363".to_string(),
    };
    let empty = NameValue {
        name: "Onbekend".to_string(),
        value: String::new(),
    };
    assert_eq!(convert::nvp_value(Some(&filled)), Some("363"));
    assert_eq!(convert::nvp_number(Some(&filled)), Some(363.0));
    assert_eq!(convert::nvp_value(Some(&empty)), None);
    assert_eq!(convert::nvp_number(Some(&empty)), None);
    assert_eq!(convert::nvp_value(None), None);
}

#[test]
fn test_nvp_serializes_as_object() {
    let pair = NameValue::from_number(Some(1.0), "Ja");
    assert_eq!(
        serde_json::to_value(&pair).unwrap(),
        json!({"name": "Ja", "value": "1"})
    );
}

#[test]
fn test_boolean_labels() {
    assert_eq!(convert::bool_to_label(Some(true), "Ja", "Nee"), Some("Ja"));
    assert_eq!(convert::bool_to_label(Some(false), "Ja", "Nee"), Some("Nee"));
    assert_eq!(convert::bool_to_label(None, "Ja", "Nee"), None);
    assert_eq!(convert::label_to_bool("Ja", "Ja", "Nee"), Some(true));
    assert_eq!(convert::label_to_bool("Nee", "Ja", "Nee"), Some(false));
    assert_eq!(convert::label_to_bool("ja", "Ja", "Nee"), None);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_required_fields() {
    let person = json!({"bsn": "111222333", "name": "Jan", "email": null});
    assert!(validation::has_required_fields(&person, &["bsn", "name"]));
    assert!(!validation::has_required_fields(&person, &["bsn", "email"]));
    assert!(!validation::has_required_fields(&json!([1, 2]), &["bsn"]));
}

#[test]
fn test_number_and_array_predicates() {
    assert!(validation::is_valid_number(Some(&json!(3.5))));
    assert!(!validation::is_valid_number(Some(&json!("3.5"))));
    assert!(!validation::is_valid_number(None));
    assert!(validation::is_valid_array(&json!([0])));
    assert!(!validation::is_valid_array(&json!([])));
}

#[test]
fn test_date_predicates() {
    let now = at(2024, 3, 1, 12);
    assert!(validation::is_valid_date("2024-03-01T12:00:00Z"));
    assert!(validation::is_valid_date("2024-03-01"));
    assert!(!validation::is_valid_date("2024-13-01"));
    assert!(!validation::is_valid_date("gisteren"));
    assert!(validation::is_date_in_future(at(2024, 3, 2, 0), now));
    assert!(validation::is_date_in_past(at(2024, 2, 29, 0), now));
    assert!(!validation::is_date_in_past(now, now));
}

#[test]
fn test_compare_identical_objects() {
    let a = json!({"a": 1, "b": {"c": [1, 2]}});
    let diff = validation::compare_objects(&a, &a);
    assert!(diff.values().all(|equal| *equal));
    assert_eq!(diff.keys().collect::<Vec<_>>(), vec!["a", "b.c"]);
}

// =============================================================================
// TEST DATA
// =============================================================================

#[test]
fn test_random_values_respect_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in datagen::random_int_array(&mut rng, 50, -5, 5) {
        assert!((-5..=5).contains(&n));
    }

    let start = at(2024, 1, 1, 0);
    let end = at(2024, 12, 31, 0);
    for _ in 0..50 {
        let date = datagen::random_date(&mut rng, start, end);
        assert!(date >= start && date <= end);
    }
}

#[test]
fn test_random_string_is_alphanumeric() {
    let mut rng = StdRng::seed_from_u64(4);
    let s = datagen::random_string(&mut rng, 32);
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_words_have_bounded_length() {
    let mut rng = StdRng::seed_from_u64(5);
    for word in datagen::sentence(&mut rng, 100).split(' ') {
        assert!((datagen::MIN_WORD_LENGTH..=datagen::MAX_WORD_LENGTH).contains(&word.len()));
    }
}

#[test]
fn test_guids_differ() {
    assert_ne!(datagen::guid(), datagen::guid());
}
