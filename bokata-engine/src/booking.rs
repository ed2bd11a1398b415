//! Booking model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::ClockTime;

/// A reservation on one service date
///
/// `time` is half-hour aligned after intake; `duration_min` is derived
/// from the meal period of that time and rewritten on every re-pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub party_size: u32,
    pub duration_min: u32,
    /// Assigned catalog table, `None` while waiting for a seat
    pub table_id: Option<u32>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Booking {
    /// Whether a table has been assigned
    pub fn is_seated(&self) -> bool {
        self.table_id.is_some()
    }

    /// Occupied `[start, end)` interval in minutes since midnight.
    /// The start snaps to the half-hour grid; the end may run past
    /// 24:00 and is never wrapped.
    pub fn interval(&self) -> (u32, u32) {
        let start = self.time.round_to_half_hour().minutes();
        (start, start + self.duration_min)
    }
}

/// Create reservation payload, unvalidated
///
/// `date` and `time` stay optional here so intake validation can
/// report which field is missing instead of failing on parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub time: Option<ClockTime>,
    pub party_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(time: &str, duration_min: u32) -> Booking {
        Booking {
            id: "b-1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
            time: time.parse().unwrap(),
            party_size: 2,
            duration_min,
            table_id: Some(1),
            name: "Test".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_interval_snaps_start() {
        assert_eq!(booking("12:05", 90).interval(), (720, 810));
        assert_eq!(booking("12:30", 90).interval(), (750, 840));
    }

    #[test]
    fn test_interval_end_may_pass_midnight() {
        let (start, end) = booking("23:00", 90).interval();
        assert_eq!(start, 23 * 60);
        assert_eq!(end, 24 * 60 + 30);
    }

    #[test]
    fn test_request_serde_defaults() {
        let request: BookingRequest = serde_json::from_str(
            r#"{"name":"Emma","date":"2025-09-05","time":"11:00","party_size":2}"#,
        )
        .unwrap();
        assert_eq!(request.name, "Emma");
        assert_eq!(request.time, Some("11:00".parse().unwrap()));
        assert_eq!(request.notes, None);
    }
}
