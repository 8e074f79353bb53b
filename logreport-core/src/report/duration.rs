use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// A request duration in milliseconds with no upper bound.
///
/// Accepts an optional `+`/`-` sign followed by ASCII digits. The magnitude
/// is kept as a digit string without leading zeros, so values of any length
/// compare numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationMs {
    negative: bool,
    digits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a base-10 integer")]
pub struct InvalidDuration(pub String);

impl FromStr for DurationMs {
    type Err = InvalidDuration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, magnitude) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidDuration(s.to_string()));
        }

        let digits = magnitude.trim_start_matches('0');
        if digits.is_empty() {
            // "-0" and "000" are both zero.
            return Ok(Self {
                negative: false,
                digits: "0".to_string(),
            });
        }

        Ok(Self {
            negative,
            digits: digits.to_string(),
        })
    }
}

impl DurationMs {
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Ord for DurationMs {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for DurationMs {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
