//! Integration tests for `capture_core::parse`.
//!
//! These tests verify that:
//! - named groups land in the fields that declare them, with coercion
//! - unmatched or empty captures follow the optional/zero rules
//! - failures surface as the right error kind

use capture_core::{CoercionError, Error, FieldKind, Registry, impl_capture, parse};

#[derive(Debug, Default, Clone, PartialEq)]
struct Reminder {
    who: String,
    message: String,
}

impl_capture!(Reminder {
    who => "who",
    message => "message",
});

#[derive(Debug, Default, Clone, PartialEq)]
struct DatedReminder {
    who: String,
    day: i64,
    month: String,
    year: i64,
    message: String,
}

impl_capture!(DatedReminder {
    who => "who",
    day => "day",
    month => "month",
    year => "year",
    message => "message",
});

#[derive(Debug, Default)]
struct WakeMe {
    month: i64,
}

impl_capture!(WakeMe { month => "month" });

#[derive(Debug, Default)]
struct WakeMeBool {
    month: bool,
}

impl_capture!(WakeMeBool { month => "month" });

#[derive(Debug, Default)]
struct WakeMeFloat {
    month: f64,
}

impl_capture!(WakeMeFloat { month => "month" });

#[derive(Debug, Default)]
struct Assignment {
    field: String,
    flag: bool,
    ratio: f64,
}

impl_capture!(Assignment {
    field => "field",
    flag => "flag",
    ratio => "ratio",
});

#[derive(Debug, Default)]
struct OptionalDay {
    who: String,
    day: Option<i64>,
    suffix: Option<String>,
}

impl_capture!(OptionalDay {
    who => "who",
    day => "day",
    suffix => "suffix",
});

#[derive(Debug, Default)]
struct PlainDay {
    day: i64,
    urgent: bool,
}

impl_capture!(PlainDay {
    day => "day",
    urgent => "urgent",
});

#[derive(Debug, Default)]
struct Contact {
    who: String,
    secret: String,
}

impl_capture!(Contact { who => "who" });

const DATED: &str = r"remind (?P<who>\w+) on the (?P<day>\d{1,2})(?:(st|nd|rd|th))? of (?P<month>october|november|december) (?P<year>\d{4}) to (?P<message>.*)";
const WAKE: &str = r"wake me up when (?P<month>september|october|november|december) ends";

#[test]
fn test_parse_strings() {
    let mut reminder = Reminder::default();

    parse(
        r"remind (?P<who>\w+) to (?P<message>.*)",
        "remind John to buy milk",
        &mut reminder,
    )
    .unwrap();

    assert_eq!(reminder.who, "John");
    assert_eq!(reminder.message, "buy milk");
}

#[test]
fn test_parse_integers() {
    let mut reminder = DatedReminder::default();

    parse(
        DATED,
        "remind John on the 31st of october 2030 to buy milk",
        &mut reminder,
    )
    .unwrap();

    assert_eq!(
        reminder,
        DatedReminder {
            who: "John".to_string(),
            day: 31,
            month: "october".to_string(),
            year: 2030,
            message: "buy milk".to_string(),
        }
    );
}

#[test]
fn test_parse_integer_error() {
    let mut wake = WakeMe::default();

    let result = parse(WAKE, "wake me up when september ends", &mut wake);

    match result {
        Err(Error::Coercion {
            field, kind, value, ..
        }) => {
            assert_eq!(field, "month");
            assert_eq!(kind, FieldKind::Integer);
            assert_eq!(value, "september");
        }
        other => panic!("Expected Coercion error, got {other:?}"),
    }
    assert_eq!(wake.month, 0);
}

#[test]
fn test_parse_boolean_and_float() {
    let mut assignment = Assignment::default();

    parse(
        r"set (?P<field>\w+) to (?P<flag>true|false) at (?P<ratio>[+-]?([0-9]*[.])?[0-9]+)",
        "set A to true at 2.25",
        &mut assignment,
    )
    .unwrap();

    assert_eq!(assignment.field, "A");
    assert!(assignment.flag);
    assert!((assignment.ratio - 2.25).abs() < f64::EPSILON);
}

#[test]
fn test_parse_boolean_error() {
    let mut wake = WakeMeBool::default();
    let err = parse(WAKE, "wake me up when september ends", &mut wake).unwrap_err();
    assert!(matches!(
        err,
        Error::Coercion {
            source: CoercionError::Boolean(_),
            ..
        }
    ));
}

#[test]
fn test_parse_float_error() {
    let mut wake = WakeMeFloat::default();
    let err = parse(WAKE, "wake me up when september ends", &mut wake).unwrap_err();
    assert!(matches!(
        err,
        Error::Coercion {
            source: CoercionError::Float(_),
            ..
        }
    ));
}

#[test]
fn test_destination_must_be_a_record() {
    let mut registry = Registry::new();
    registry.register::<Reminder>();
    let mut message = String::from("test");

    let err = registry
        .parse(WAKE, "wake me up when september ends", &mut message)
        .unwrap_err();

    assert!(matches!(err, Error::DestinationType { .. }));
    assert!(err.to_string().contains("destination must be a struct"));
}

#[test]
fn test_registry_binds_registered_records() {
    let mut registry = Registry::new();
    registry.register::<Reminder>();
    let mut reminder = Reminder::default();

    registry
        .parse(
            r"remind (?P<who>\w+) to (?P<message>.*)",
            "remind Ann to call back",
            &mut reminder,
        )
        .unwrap();

    assert_eq!(reminder.who, "Ann");
    assert_eq!(reminder.message, "call back");
}

#[test]
fn test_optional_field_stays_absent_on_empty_capture() {
    let pattern = r"remind (?P<who>\w+)(?: on the (?P<day>\d{1,2})(?P<suffix>st|nd|rd|th)?)?";
    let mut reminder = OptionalDay::default();

    parse(pattern, "remind John", &mut reminder).unwrap();

    assert_eq!(reminder.who, "John");
    assert_eq!(reminder.day, None);
    assert_eq!(reminder.suffix, None);

    let mut reminder = OptionalDay::default();
    parse(pattern, "remind John on the 3rd", &mut reminder).unwrap();
    assert_eq!(reminder.day, Some(3));
    assert_eq!(reminder.suffix.as_deref(), Some("rd"));
}

#[test]
fn test_plain_field_gets_zero_on_empty_capture() {
    let mut plain = PlainDay {
        day: 12,
        urgent: true,
    };

    parse(
        r"ping(?: in (?P<day>\d+) days)?(?P<urgent>!)?",
        "ping",
        &mut plain,
    )
    .unwrap();

    assert_eq!(plain.day, 0);
    assert!(!plain.urgent);
}

#[test]
fn test_unmatched_text_leaves_fields_untouched() {
    let mut reminder = Reminder {
        who: "before".to_string(),
        message: "unchanged".to_string(),
    };

    parse(
        r"remind (?P<who>\w+) to (?P<message>.*)",
        "nothing relevant here",
        &mut reminder,
    )
    .unwrap();

    assert_eq!(reminder.who, "before");
    assert_eq!(reminder.message, "unchanged");
}

#[test]
fn test_groups_without_fields_are_ignored() {
    let mut reminder = Reminder::default();

    parse(
        r"(?P<greeting>hi) (?P<who>\w+)",
        "hi Bea",
        &mut reminder,
    )
    .unwrap();

    assert_eq!(reminder.who, "Bea");
    assert!(reminder.message.is_empty());
}

#[test]
fn test_fields_outside_descriptor_are_never_written() {
    let mut contact = Contact {
        who: String::new(),
        secret: "keep".to_string(),
    };

    parse(r"(?P<who>\w+) (?P<secret>\w+)", "Ann hunter2", &mut contact).unwrap();

    assert_eq!(contact.who, "Ann");
    assert_eq!(contact.secret, "keep");
}

#[test]
fn test_registered_type_still_reports_bad_pattern() {
    let mut registry = Registry::new();
    registry.register::<Reminder>();
    let mut reminder = Reminder::default();

    let err = registry
        .parse(r"remind (?P<who>\w+", "remind John", &mut reminder)
        .unwrap_err();

    assert!(matches!(err, Error::Pattern(_)));
}

#[test]
fn test_parse_is_idempotent() {
    let text = "remind John on the 2nd of november 2031 to water plants";
    let mut first = DatedReminder::default();
    let mut second = DatedReminder::default();

    parse(DATED, text, &mut first).unwrap();
    parse(DATED, text, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_pattern_is_reported() {
    let mut reminder = Reminder::default();
    let err = parse(r"remind (?P<who>\w+", "remind John", &mut reminder).unwrap_err();
    assert!(matches!(err, Error::Pattern(_)));
}

#[test]
fn test_trivial_inputs_do_nothing() {
    let mut reminder = Reminder {
        who: "x".to_string(),
        message: String::new(),
    };

    assert!(parse("", "remind John to go", &mut reminder).is_ok());
    assert!(parse(r"(?P<who>\w+", "", &mut reminder).is_ok());
    assert!(parse::<Reminder>(r"(?P<who>\w+)", "John", None).is_ok());
    assert_eq!(reminder.who, "x");
}
