use crate::report::{DurationMs, InvalidDuration};
use pretty_assertions::assert_eq;

fn ms(s: &str) -> DurationMs {
    s.parse().unwrap()
}

#[test]
fn accepts_signed_and_unsigned_digit_runs() {
    for input in ["0", "42", "+42", "-42", "0042", "99999999999999999999999999"] {
        assert!(input.parse::<DurationMs>().is_ok(), "{input} should parse");
    }
}

#[test]
fn rejects_anything_but_ascii_digits() {
    for input in ["", "-", "+", "slow", "1.5", "1_000", " 7", "7 ", "--1", "1e3", "١٢"] {
        assert_eq!(
            input.parse::<DurationMs>(),
            Err(InvalidDuration(input.to_string())),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn leading_zeros_and_signed_zero_are_normalized() {
    assert_eq!(ms("0042"), ms("42"));
    assert_eq!(ms("+42"), ms("42"));
    assert_eq!(ms("-0"), ms("0"));
    assert_eq!(ms("-000"), ms("+0"));
}

#[test]
fn orders_by_numeric_value() {
    // Arrange
    let mut values: Vec<DurationMs> = [
        "100",
        "-5",
        "99999999999999999999",
        "9",
        "-100",
        "0",
        "18446744073709551616",
    ]
    .into_iter()
    .map(ms)
    .collect();

    // Act
    values.sort();

    // Assert
    let expected: Vec<DurationMs> = [
        "-100",
        "-5",
        "0",
        "9",
        "100",
        "18446744073709551616",
        "99999999999999999999",
    ]
    .into_iter()
    .map(ms)
    .collect();
    assert_eq!(values, expected);
}

#[test]
fn longer_digit_runs_win_over_lexically_larger_ones() {
    assert!(ms("10") > ms("9"));
    assert!(ms("-10") < ms("-9"));
    assert!(ms("1") > ms("-99999999999999999999"));
}
