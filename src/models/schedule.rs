use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::{TimeError, time_to_minutes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    /// Accepts full names and three-letter abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                name == needle || name[..3] == needle
            })
            .ok_or_else(|| format!("Unknown day: {}", s))
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Lab,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub kind: SessionKind,
}

impl ClassSession {
    pub fn new(id: &str, subject: &str, start_time: &str, end_time: &str, kind: SessionKind) -> Self {
        Self {
            id: id.to_string(),
            subject: subject.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            kind,
        }
    }

    pub fn start_minutes(&self) -> Result<u32, TimeError> {
        time_to_minutes(&self.start_time)
    }

    pub fn end_minutes(&self) -> Result<u32, TimeError> {
        time_to_minutes(&self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: DayOfWeek,
    pub sessions: Vec<ClassSession>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_names_loosely() {
        assert_eq!("monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!("Thu".parse::<DayOfWeek>(), Ok(DayOfWeek::Thursday));
        assert_eq!(" SUNDAY ".parse::<DayOfWeek>(), Ok(DayOfWeek::Sunday));
        assert!("Funday".parse::<DayOfWeek>().is_err());
        assert!("".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn session_serializes_with_camel_case_fields() {
        let session = ClassSession::new("mon-1", "Physics", "08:00", "08:50", SessionKind::Lab);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["startTime"], "08:00");
        assert_eq!(json["endTime"], "08:50");
        assert_eq!(json["type"], "Lab");
    }
}
