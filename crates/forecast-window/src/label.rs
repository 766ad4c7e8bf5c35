//! Panel labels.
//!
//! A label reads
//!
//! ```text
//! Day 2 Forecast Trend
//! Start: 07/02/2024 12Z
//! End: 07/03/2024 00Z
//! ```
//!
//! Timestamps carry hour precision, which matches NDFD period boundaries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use ndfd_common::ElementKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H";

/// Whether panels are numbered as days or nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPart {
    Day,
    Night,
}

impl DayPart {
    /// Maximum temperature is a daytime element, minimum temperature a
    /// nighttime one.
    pub fn for_element(element: ElementKind) -> Self {
        match element {
            ElementKind::MaxTemp => DayPart::Day,
            ElementKind::MinTemp => DayPart::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayPart::Day => "Day",
            DayPart::Night => "Night",
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The title of one map panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLabel {
    pub day_part: DayPart,
    pub number: u32,
    pub trend: bool,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PanelLabel {
    /// First line of the label, e.g. `Night 3 Forecast`.
    pub fn heading(&self) -> String {
        format!(
            "{} {} Forecast{}",
            self.day_part,
            self.number,
            if self.trend { " Trend" } else { "" }
        )
    }
}

impl fmt::Display for PanelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nStart: {}Z\nEnd: {}Z",
            self.heading(),
            self.start.format(TIMESTAMP_FORMAT),
            self.end.format(TIMESTAMP_FORMAT)
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelParseError {
    #[error("label must have 3 lines, found {0}")]
    LineCount(usize),

    #[error("invalid heading: {0}")]
    Heading(String),

    #[error("invalid timestamp line: {0}")]
    Timestamp(String),
}

impl FromStr for PanelLabel {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 3 {
            return Err(LabelParseError::LineCount(lines.len()));
        }

        let heading = lines[0];
        let bad_heading = || LabelParseError::Heading(heading.to_string());

        let (body, trend) = match heading.strip_suffix(" Trend") {
            Some(body) => (body, true),
            None => (heading, false),
        };
        let body = body.strip_suffix(" Forecast").ok_or_else(bad_heading)?;
        let (part, number) = body.split_once(' ').ok_or_else(bad_heading)?;
        let day_part = match part {
            "Day" => DayPart::Day,
            "Night" => DayPart::Night,
            _ => return Err(bad_heading()),
        };
        let number = number.parse().map_err(|_| bad_heading())?;

        Ok(PanelLabel {
            day_part,
            number,
            trend,
            start: parse_timestamp(lines[1], "Start: ")?,
            end: parse_timestamp(lines[2], "End: ")?,
        })
    }
}

fn parse_timestamp(line: &str, prefix: &str) -> Result<DateTime<Utc>, LabelParseError> {
    let bad = || LabelParseError::Timestamp(line.to_string());
    let text = line
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix('Z'))
        .ok_or_else(bad)?;
    // chrono needs minutes to build a time
    NaiveDateTime::parse_from_str(&format!("{}:00", text), "%m/%d/%Y %H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|_| bad())
}
