//! Canonical calendar-day keys.
//!
//! A [`DateKey`] identifies one local calendar day as a `YYYY-MM-DD` string.
//! The format is fixed so that lexicographic order of encoded keys equals
//! chronological order of the days they name.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::KeyError;

/// A calendar day, keyed in the fixed `YYYY-MM-DD` format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Encode a calendar date as its canonical key.
    pub fn encode(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Decode a key string back into a calendar day.
    ///
    /// Strict inverse of [`encode`](Self::encode): only the exact
    /// `YYYY-MM-DD` shape with a valid month and day is accepted.
    ///
    /// # Errors
    /// Returns [`KeyError::Malformed`] for anything else.
    pub fn decode(input: &str) -> Result<Self, KeyError> {
        let malformed = || KeyError::Malformed {
            input: input.to_string(),
        };

        let bytes = input.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(malformed());
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
        if !digits_ok {
            return Err(malformed());
        }

        let year: i32 = input[0..4].parse().map_err(|_| malformed())?;
        let month: u32 = input[5..7].parse().map_err(|_| malformed())?;
        let day: u32 = input[8..10].parse().map_err(|_| malformed())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(DateKey)
            .ok_or_else(malformed)
    }

    /// The calendar date this key names.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The key for the preceding calendar day.
    ///
    /// Returns `None` only at the lower bound of the representable range.
    pub fn prev_day(&self) -> Option<Self> {
        self.0.pred_opt().map(DateKey)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for DateKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::decode(&value)
    }
}
