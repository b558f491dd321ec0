//! Natural-language date parsing for `attrDate-` / `attrDateTime-` columns
//!
//! Accepts ISO and common regional layouts, month names with optional
//! ordinals and commas, an optional trailing time, and a few relative
//! expressions resolved against a fixed reference instant.

use crate::error::ImportResult;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Regex;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",  // 2024-06-01
    "%Y/%m/%d",  // 2024/06/01
    "%m/%d/%Y",  // 06/01/2024
    "%d.%m.%Y",  // 01.06.2024
    "%B %d %Y",  // June 1 2024, Jun 1 2024
    "%d %B %Y",  // 1 June 2024
    "%d-%B-%Y",  // 1-Jun-2024
    "%Y %B %d",  // 2024 June 1
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",    // 14:30:00
    "%H:%M",       // 14:30
    "%I:%M:%S %p", // 2:30:00 pm
    "%I:%M %p",    // 2:30 pm
];

/// Parses free-form date/time text relative to a reference instant
pub struct DateParser {
    reference: NaiveDateTime,
    ordinal: Regex,
    bare_hour: Regex,
    relative: Regex,
}

impl DateParser {
    pub fn new(reference: NaiveDateTime) -> ImportResult<Self> {
        Ok(Self {
            reference,
            ordinal: Regex::new(r"(?i)(\d)(st|nd|rd|th)\b")?,
            bare_hour: Regex::new(r"(?i)(^|\s)(\d{1,2})\s*([ap]m)$")?,
            relative: Regex::new(
                r"(?i)^(?:(\d+)\s+(day|week)s?\s+ago|in\s+(\d+)\s+(day|week)s?)$",
            )?,
        })
    }

    /// Parser anchored at the current local time
    pub fn now() -> ImportResult<Self> {
        Self::new(Local::now().naive_local())
    }

    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Interpret `input`, or `None` if no layout fits
    pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        let text = self.normalize(input);
        if text.is_empty() {
            return None;
        }
        self.parse_relative(&text)
            .or_else(|| parse_absolute(&text))
            .or_else(|| self.parse_time_today(&text))
    }

    fn normalize(&self, input: &str) -> String {
        let without_commas = input.replace(',', " ");
        let without_ordinals = self.ordinal.replace_all(&without_commas, "$1");
        let collapsed = without_ordinals.split_whitespace().collect::<Vec<_>>().join(" ");
        // `2 pm` → `2:00 pm`; chrono needs minutes to build a time
        self.bare_hour
            .replace(&collapsed, "${1}${2}:00 ${3}")
            .into_owned()
    }

    fn parse_relative(&self, text: &str) -> Option<NaiveDateTime> {
        let midnight = self.reference.date().and_time(NaiveTime::MIN);
        match text.to_lowercase().as_str() {
            "now" => return Some(self.reference),
            "today" => return Some(midnight),
            "tomorrow" => return midnight.checked_add_signed(TimeDelta::try_days(1)?),
            "yesterday" => return midnight.checked_sub_signed(TimeDelta::try_days(1)?),
            _ => {}
        }

        let captures = self.relative.captures(text)?;
        let (count, unit, forward) = match (captures.get(1), captures.get(3)) {
            (Some(count), _) => (count, captures.get(2)?, false),
            (None, Some(count)) => (count, captures.get(4)?, true),
            (None, None) => return None,
        };
        let count: i64 = count.as_str().parse().ok()?;
        let days = if unit.as_str().eq_ignore_ascii_case("week") {
            count.checked_mul(7)?
        } else {
            count
        };
        let delta = TimeDelta::try_days(days)?;
        if forward {
            self.reference.checked_add_signed(delta)
        } else {
            self.reference.checked_sub_signed(delta)
        }
    }

    fn parse_time_today(&self, text: &str) -> Option<NaiveDateTime> {
        TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
            .map(|time| self.reference.date().and_time(time))
    }
}

fn parse_absolute(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }

    for date_fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, date_fmt) {
            return Some(date.and_time(NaiveTime::MIN));
        }
        for time_fmt in TIME_FORMATS {
            let fmt = format!("{date_fmt} {time_fmt}");
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, &fmt) {
                return Some(dt);
            }
        }
    }
    None
}
