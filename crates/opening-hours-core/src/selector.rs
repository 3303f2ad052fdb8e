//! Selector values carried by a [`Rule`](crate::rule::Rule).
//!
//! Each type renders itself in opening_hours surface syntax through
//! `Display`. None of them are parsed from grammar text here; they arrive
//! already structured (typically as JSON).

use crate::error::{OpeningHoursError, Result};
use crate::month::Month;
use crate::util::{capitalize, de_weekday_to_en};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format minutes since midnight as `HH:MM`.
///
/// Values past 24:00 are kept as extended hours (`26:00`), as the grammar
/// allows for spans crossing midnight.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Two-letter grammar abbreviation of a weekday.
pub fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Parse a two-letter weekday abbreviation.
///
/// English abbreviations are accepted in any case; German ones (`Di`, `Mi`,
/// `Do`, `So`, ...) are translated first.
///
/// # Errors
/// Returns `OpeningHoursError::InvalidWeekday` for anything else.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    let capitalized = capitalize(s);
    let english = match capitalized.as_str() {
        "Mo" | "Tu" | "We" | "Th" | "Fr" | "Sa" | "Su" => capitalized.as_str(),
        "Di" | "Mi" | "Do" | "So" => de_weekday_to_en(s),
        _ => return Err(OpeningHoursError::InvalidWeekday(s.to_string())),
    };
    let day = match english {
        "Mo" => Weekday::Mon,
        "Tu" => Weekday::Tue,
        "We" => Weekday::Wed,
        "Th" => Weekday::Thu,
        "Fr" => Weekday::Fri,
        "Sa" => Weekday::Sat,
        _ => Weekday::Sun,
    };
    Ok(day)
}

/// Year range such as `2020`, `2020-2025` or `2020-2030/2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u16>,
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        if let Some(end) = self.end {
            write!(f, "-{}", end)?;
        }
        if let Some(interval) = self.interval {
            write!(f, "/{}", interval)?;
        }
        Ok(())
    }
}

/// A month, optionally narrowed to a single day (`Dec 24`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: Month,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => write!(f, "{} {:02}", self.month, day),
            None => write!(f, "{}", self.month),
        }
    }
}

/// Month or month-day range: `Jan-Mar`, `Dec 24-26`, `Dec 24-Jan 02`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: MonthDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<MonthDay>,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        if let Some(end) = self.end {
            // Same-month day ranges drop the repeated month name.
            match (self.start.day, end.day) {
                (Some(_), Some(day)) if end.month == self.start.month => {
                    write!(f, "-{:02}", day)?
                }
                _ => write!(f, "-{}", end)?,
            }
        }
        Ok(())
    }
}

/// ISO week range. Rendered without the `week` keyword, which the rule
/// emits once in front of the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u8>,
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.start)?;
        if let Some(end) = self.end {
            write!(f, "-{:02}", end)?;
        }
        if let Some(interval) = self.interval {
            write!(f, "/{}", interval)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolidayKind {
    /// Public holiday.
    #[serde(rename = "PH")]
    Public,
    /// School holiday.
    #[serde(rename = "SH")]
    School,
}

/// Holiday selector, optionally shifted by whole days (`PH +1 day`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub kind: HolidayKind,
    #[serde(default)]
    pub offset_days: i16,
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            HolidayKind::Public => "PH",
            HolidayKind::School => "SH",
        })?;
        match self.offset_days {
            0 => Ok(()),
            1 | -1 => write!(f, " {:+} day", self.offset_days),
            n => write!(f, " {:+} days", n),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawWeekDayRange {
    start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nth: Vec<i8>,
}

/// Weekday range such as `Mo-Fr` or `Su[1,-1]`.
///
/// Serialised with the two-letter grammar abbreviations rather than
/// chrono's own weekday names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeekDayRange", into = "RawWeekDayRange")]
pub struct WeekDayRange {
    pub start: Weekday,
    pub end: Option<Weekday>,
    /// Occurrences within the month; negative values count from the end.
    pub nth: Vec<i8>,
}

impl TryFrom<RawWeekDayRange> for WeekDayRange {
    type Error = OpeningHoursError;

    fn try_from(raw: RawWeekDayRange) -> Result<Self> {
        Ok(Self {
            start: parse_weekday(&raw.start)?,
            end: raw.end.as_deref().map(parse_weekday).transpose()?,
            nth: raw.nth,
        })
    }
}

impl From<WeekDayRange> for RawWeekDayRange {
    fn from(range: WeekDayRange) -> Self {
        Self {
            start: weekday_abbrev(range.start).to_string(),
            end: range.end.map(|d| weekday_abbrev(d).to_string()),
            nth: range.nth,
        }
    }
}

impl fmt::Display for WeekDayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(weekday_abbrev(self.start))?;
        if let Some(end) = self.end {
            write!(f, "-{}", weekday_abbrev(end))?;
        }
        if !self.nth.is_empty() {
            let nth: Vec<String> = self.nth.iter().map(|n| n.to_string()).collect();
            write!(f, "[{}]", nth.join(","))?;
        }
        Ok(())
    }
}

/// Time span in minutes since midnight: `08:00-12:00`, `18:00+`,
/// `10:00-16:00/01:30`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u16>,
    #[serde(default)]
    pub open_ended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u16>,
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.start))?;
        if let Some(end) = self.end {
            write!(f, "-{}", format_minutes(end))?;
        }
        if self.open_ended {
            f.write_str("+")?;
        }
        if let Some(interval) = self.interval {
            write!(f, "/{}", format_minutes(interval))?;
        }
        Ok(())
    }
}

/// Rule state modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleModifier {
    Open,
    Closed,
    Off,
    Unknown,
}

impl fmt::Display for RuleModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleModifier::Open => "open",
            RuleModifier::Closed => "closed",
            RuleModifier::Off => "off",
            RuleModifier::Unknown => "unknown",
        })
    }
}
