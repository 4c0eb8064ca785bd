//! Plain calendar dates for the booking calendar.
//!
//! Availability payloads and listing windows carry dates as `YYYY-MM-DD`
//! strings with calendar-date semantics. Parsing goes through a plain
//! string split, never a timestamp or locale parser, so a date can never
//! shift by a day depending on the client's time zone.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A (year, month, day) triple with no time or zone component.
///
/// Equality and ordering are pure calendar comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateParseError {
    #[error("invalid date string: {0}")]
    Malformed(String),
    #[error("date out of range: {0}")]
    OutOfRange(String),
}

impl CalendarDate {
    /// Build a date from parts, validating month and day bounds.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Parse a `YYYY-MM-DD` string. A trailing `T...` time part is ignored
    /// so RFC 3339 timestamps degrade to their date part.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let date_part = input.split('T').next().unwrap_or(input);
        let parts: Vec<&str> = date_part.split('-').collect();
        if parts.len() != 3 {
            return Err(DateParseError::Malformed(input.to_string()));
        }
        let (year, month, day) = match (
            parts[0].parse::<i32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        ) {
            (Ok(y), Ok(m), Ok(d)) => (y, m, d),
            _ => return Err(DateParseError::Malformed(input.to_string())),
        };
        Self::from_ymd(year, month, day).ok_or_else(|| DateParseError::OutOfRange(input.to_string()))
    }

    /// Today per the local clock, normalized to a plain date.
    pub fn today() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The next calendar day.
    pub fn succ(&self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..*self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Day-of-week with 0 = Sunday, matching the calendar grid's column
    /// layout.
    pub fn weekday_from_sunday(&self) -> u32 {
        match chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day) {
            Some(date) => date.weekday().num_days_from_sunday(),
            None => 0,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Roll (year, month) forward by `offset` months.
pub fn month_offset(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let total = month - 1 + offset;
    (year + (total / 12) as i32, total % 12 + 1)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Iterator over the closed interval `[start, end]`, one day at a time.
/// Empty when `start > end`.
pub fn range_inclusive(start: CalendarDate, end: CalendarDate) -> DateRange {
    DateRange {
        next: if start <= end { Some(start) } else { None },
        end,
    }
}

pub struct DateRange {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for DateRange {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(current.succ())
        } else {
            None
        };
        Some(current)
    }
}
