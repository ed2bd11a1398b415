//! Service-day reporting
//!
//! Read-side aggregates over one date's bookings: guest totals split
//! by meal period, the busiest and quietest booked hours, and
//! half-hour slot grouping for the seating rota.

use std::collections::BTreeMap;

use bokata_engine::booking::Booking;
use bokata_engine::meal::MealPeriod;
use bokata_engine::time::{format_minutes, ClockTime};
use serde::Serialize;

/// Guest totals per meal period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealGuests {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
    pub other: u32,
}

impl MealGuests {
    fn add(&mut self, meal: MealPeriod, guests: u32) {
        match meal {
            MealPeriod::Breakfast => self.breakfast += guests,
            MealPeriod::Lunch => self.lunch += guests,
            MealPeriod::Dinner => self.dinner += guests,
            MealPeriod::Other => self.other += guests,
        }
    }
}

/// A booked hour of the day with its booking count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourWindow {
    /// Hour of day (0..24)
    pub hour: u32,
    pub bookings: u32,
}

impl HourWindow {
    /// Dashboard label for the window, e.g. `18:00 – 19:00`;
    /// the end hour wraps at midnight
    pub fn label(&self) -> String {
        format!(
            "{} – {}",
            format_minutes(self.hour * 60),
            format_minutes((self.hour + 1) % 24 * 60)
        )
    }
}

/// Aggregates for one service date
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub bookings: usize,
    pub guests: u32,
    pub guests_by_meal: MealGuests,
    /// Hour with the most bookings; ties keep the hour met first in
    /// the scan
    pub busiest_hour: Option<HourWindow>,
    /// Hour with the fewest bookings; ties keep the hour met first in
    /// the scan
    pub quietest_hour: Option<HourWindow>,
    /// Parties still waiting for a table
    pub unseated: usize,
}

impl DaySummary {
    /// Computes the summary from one date's bookings.
    ///
    /// The hour extremes scan the slice in the order given: on tied
    /// counts the hour encountered first wins. Feeding the stored day
    /// (packing order after a re-pack) therefore reproduces the hours
    /// the dashboard shows.
    pub fn calculate(bookings: &[Booking]) -> Self {
        let mut guests = 0;
        let mut guests_by_meal = MealGuests::default();
        // (hour, count) in first-encounter order; at most 24 entries
        let mut per_hour: Vec<(u32, u32)> = Vec::new();
        let mut unseated = 0;

        for booking in bookings {
            guests += booking.party_size;
            guests_by_meal.add(MealPeriod::classify(booking.time), booking.party_size);
            let hour = booking.time.hour();
            match per_hour.iter().position(|&(h, _)| h == hour) {
                Some(i) => per_hour[i].1 += 1,
                None => per_hour.push((hour, 1)),
            }
            if !booking.is_seated() {
                unseated += 1;
            }
        }

        let mut busiest_hour: Option<HourWindow> = None;
        let mut quietest_hour: Option<HourWindow> = None;
        for &(hour, count) in &per_hour {
            // Strict comparisons keep the first-encountered hour on ties
            if busiest_hour.is_none_or(|w| count > w.bookings) {
                busiest_hour = Some(HourWindow {
                    hour,
                    bookings: count,
                });
            }
            if quietest_hour.is_none_or(|w| count < w.bookings) {
                quietest_hour = Some(HourWindow {
                    hour,
                    bookings: count,
                });
            }
        }

        Self {
            bookings: bookings.len(),
            guests,
            guests_by_meal,
            busiest_hour,
            quietest_hour,
            unseated,
        }
    }
}

/// Groups bookings by their half-hour slot for the seating rota.
/// Times are snapped before grouping so un-packed input still lands
/// on the grid.
pub fn bookings_by_slot(bookings: &[Booking]) -> BTreeMap<ClockTime, Vec<Booking>> {
    let mut slots: BTreeMap<ClockTime, Vec<Booking>> = BTreeMap::new();
    for booking in bookings {
        slots
            .entry(booking.time.round_to_half_hour())
            .or_default()
            .push(booking.clone());
    }
    slots
}
