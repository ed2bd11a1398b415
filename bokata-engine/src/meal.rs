//! Meal period classification and seating durations
//!
//! The service day is split into three named meal windows. A booking's
//! meal period decides how long its table stays occupied; times outside
//! every window fall back to the default duration.

use serde::{Deserialize, Serialize};

use crate::time::ClockTime;

/// Meal window bounds in minutes since midnight, both ends inclusive.
/// Lunch and dinner close at :31 rather than :30 so that a booking
/// placed exactly on the last half-hour slot still classifies into the
/// meal instead of falling through to `Other`.
const BREAKFAST_WINDOW: (u32, u32) = (8 * 60, 10 * 60 + 59);
const LUNCH_WINDOW: (u32, u32) = (11 * 60, 14 * 60 + 31);
const DINNER_WINDOW: (u32, u32) = (17 * 60, 21 * 60 + 31);

/// Meal period of the service day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
    /// Outside every configured meal window
    Other,
}

impl MealPeriod {
    /// Classifies a time of day into its meal period
    pub fn classify(time: ClockTime) -> MealPeriod {
        let m = time.minutes();
        let within = |(start, end): (u32, u32)| m >= start && m <= end;
        if within(BREAKFAST_WINDOW) {
            MealPeriod::Breakfast
        } else if within(LUNCH_WINDOW) {
            MealPeriod::Lunch
        } else if within(DINNER_WINDOW) {
            MealPeriod::Dinner
        } else {
            MealPeriod::Other
        }
    }

    /// Earliest window start and latest window end of the service day,
    /// in minutes since midnight
    pub(crate) fn service_bounds() -> (u32, u32) {
        let starts = [BREAKFAST_WINDOW.0, LUNCH_WINDOW.0, DINNER_WINDOW.0];
        let ends = [BREAKFAST_WINDOW.1, LUNCH_WINDOW.1, DINNER_WINDOW.1];
        let earliest = starts.into_iter().min().unwrap_or(0);
        let latest = ends.into_iter().max().unwrap_or(0);
        (earliest, latest)
    }
}

/// Seating duration per meal period, in minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPolicy {
    pub breakfast_min: u32,
    pub lunch_min: u32,
    pub dinner_min: u32,
    /// Applied to bookings outside every meal window
    pub default_min: u32,
}

impl Default for MealPolicy {
    fn default() -> Self {
        Self {
            breakfast_min: 60,
            lunch_min: 90,
            dinner_min: 120,
            default_min: 90,
        }
    }
}

impl MealPolicy {
    /// Duration for a given meal period
    pub fn duration_for(&self, meal: MealPeriod) -> u32 {
        match meal {
            MealPeriod::Breakfast => self.breakfast_min,
            MealPeriod::Lunch => self.lunch_min,
            MealPeriod::Dinner => self.dinner_min,
            MealPeriod::Other => self.default_min,
        }
    }

    /// Duration for a booking starting at `time`
    pub fn duration_at(&self, time: ClockTime) -> u32 {
        self.duration_for(MealPeriod::classify(time))
    }
}
