//! Wall-clock time handling
//!
//! Booking times are minutes since midnight on a single service day.
//! Seating intervals may run past midnight (e.g. a 21:30 dinner ends at
//! 23:30, a 23:00 start would end at 25:00), so interval arithmetic is
//! plain minute math and only `ClockTime` itself is bounded to one day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one service day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Failed to parse an `HH:MM` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(pub String);

/// A time of day, stored as minutes since midnight (0..1440)
///
/// Serializes as an `HH:MM` string so payloads stay readable and
/// compatible with the dashboard wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Midnight (00:00)
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Builds a time from hour and minute, `None` if out of range
    pub fn from_hm(hour: u32, minute: u32) -> Option<ClockTime> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(ClockTime(hour * 60 + minute))
    }

    /// Builds a time from minutes since midnight, `None` if `>= 1440`
    pub const fn from_minutes(minutes: u32) -> Option<ClockTime> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(ClockTime(minutes))
    }

    /// Minutes since midnight
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Hour component (0..24)
    pub const fn hour(self) -> u32 {
        self.0 / 60
    }

    /// Minute component (0..60)
    pub const fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Snaps to the half-hour grid the floor plan runs on:
    /// minutes 0-14 floor to `:00`, 15-44 go to `:30`, 45-59 round up
    /// to the next hour. Rounding up from 23:45+ wraps to 00:00.
    pub fn round_to_half_hour(self) -> ClockTime {
        let minute = self.minute();
        let rounded = if minute < 15 {
            self.hour() * 60
        } else if minute < 45 {
            self.hour() * 60 + 30
        } else {
            (self.hour() + 1) % 24 * 60
        };
        ClockTime(rounded)
    }
}

/// Formats a minute count as zero-padded `HH:MM` without wrapping,
/// so interval ends past midnight read as `24:30`, `25:00`, ...
pub fn format_minutes(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Half-open interval overlap test over `[start, end)` minute spans.
/// Back-to-back seatings sharing an endpoint do not overlap.
pub fn intervals_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_minutes(self.0))
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hour: u32 = h.trim().parse().map_err(|_| err())?;
        let minute: u32 = m.trim().parse().map_err(|_| err())?;
        ClockTime::from_hm(hour, minute).ok_or_else(err)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> String {
        time.to_string()
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(t("09:05").minutes(), 9 * 60 + 5);
        assert_eq!(t("00:00"), ClockTime::MIDNIGHT);
        assert_eq!(t("23:59").minutes(), 1439);
        assert_eq!(t("8:30"), ClockTime::from_hm(8, 30).unwrap());
        assert_eq!(t("12:05").to_string(), "12:05");
        assert_eq!(t("00:00").to_string(), "00:00");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "12", "12:", ":30", "ab:cd", "24:00", "12:60", "12-30"] {
            assert!(bad.parse::<ClockTime>().is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn test_round_to_half_hour() {
        assert_eq!(t("12:14").round_to_half_hour(), t("12:00"));
        assert_eq!(t("12:15").round_to_half_hour(), t("12:30"));
        assert_eq!(t("12:44").round_to_half_hour(), t("12:30"));
        assert_eq!(t("12:45").round_to_half_hour(), t("13:00"));
        assert_eq!(t("23:50").round_to_half_hour(), t("00:00"));
    }

    #[test]
    fn test_round_is_idempotent() {
        for s in ["08:00", "11:07", "14:31", "17:45", "23:59"] {
            let once = t(s).round_to_half_hour();
            assert_eq!(once.round_to_half_hour(), once);
        }
    }

    #[test]
    fn test_intervals_overlap() {
        assert!(intervals_overlap(720, 810, 750, 840));
        assert!(intervals_overlap(750, 840, 720, 810));
        assert!(intervals_overlap(700, 900, 750, 780));
        assert!(!intervals_overlap(720, 810, 810, 900));
        assert!(!intervals_overlap(810, 900, 720, 810));
        assert!(!intervals_overlap(480, 540, 660, 750));
    }

    #[test]
    fn test_format_minutes_past_midnight() {
        assert_eq!(format_minutes(21 * 60 + 30), "21:30");
        assert_eq!(format_minutes(24 * 60 + 30), "24:30");
        assert_eq!(format_minutes(25 * 60), "25:00");
    }

    #[test]
    fn test_serde_string_form() {
        let json = serde_json::to_string(&t("12:30")).unwrap();
        assert_eq!(json, "\"12:30\"");
        let back: ClockTime = serde_json::from_str("\"12:30\"").unwrap();
        assert_eq!(back, t("12:30"));
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
