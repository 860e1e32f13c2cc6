use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 1440;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time '{0}', expected HH:MM")]
pub struct TimeParseError(pub String);

/// Time of day in minutes since midnight, always in `0..1440`.
///
/// Ordering is the plain numeric one and ignores wraparound, so `23:50`
/// sorts after `00:10` even when the latter falls on the next day.
#[derive(Debug, Clone, Copy, Default, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time(u32);

impl Time {
    pub const MIDNIGHT: Time = Time(0);

    pub fn from_minutes(minutes: u64) -> Time {
        Time((minutes % MINUTES_PER_DAY as u64) as u32)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn add_minutes(self, delta: u64) -> Time {
        Time::from_minutes(self.0 as u64 + delta % MINUTES_PER_DAY as u64)
    }

    pub fn compare(&self, other: &Time) -> Ordering {
        self.minutes().cmp(&other.minutes())
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = (self.0 / 60) % 24;
        let mins = self.0 % 60;
        write!(f, "{:02}:{:02}", hours, mins)
    }
}

impl FromStr for Time {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeParseError(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(err)?;
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(hh) || hh.len() > 2 || !is_digits(mm) || mm.len() != 2 {
            return Err(err());
        }
        let hours = hh.parse::<u32>().map_err(|_| err())?;
        let mins = mm.parse::<u32>().map_err(|_| err())?;
        if hours > 23 || mins > 59 {
            return Err(err());
        }
        Ok(Time(hours * 60 + mins))
    }
}

impl TryFrom<String> for Time {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(value: Time) -> Self {
        value.to_string()
    }
}

impl Add<u64> for Time {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        self.add_minutes(rhs)
    }
}

impl AddAssign<u64> for Time {
    fn add_assign(&mut self, rhs: u64) {
        *self = self.add_minutes(rhs);
    }
}
