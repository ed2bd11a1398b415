//! Table assignment engine
//!
//! Two assignment policies work the same booking data:
//!
//! * [`SeatingEngine::find_table`] answers an incremental query ("can
//!   this request be seated right now?") by scanning tables in catalog
//!   order and taking the first fit. Existing assignments are never
//!   touched.
//! * [`SeatingEngine::repack_day`] rebuilds one date from scratch:
//!   largest parties first, each onto the tightest free table. Packing
//!   big groups before small ones keeps 6-tops from being burned on
//!   couples when a later party of six would then not fit.
//!
//! The two orderings are deliberately different and neither may stand
//! in for the other.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::booking::Booking;
use crate::meal::{MealPeriod, MealPolicy};
use crate::table::TableCatalog;
use crate::time::{intervals_overlap, ClockTime};

/// Step between bookable slots, in minutes
pub const SLOT_STEP_MIN: u32 = 30;

/// Availability of one service slot for a given party size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    pub time: ClockTime,
    pub available: bool,
}

/// Stateless seating logic over a fixed table catalog
///
/// The engine owns no bookings; callers pass the current set in and,
/// for re-packs, store the returned set back.
#[derive(Debug, Clone, Default)]
pub struct SeatingEngine {
    catalog: TableCatalog,
    meals: MealPolicy,
}

impl SeatingEngine {
    pub fn new(catalog: TableCatalog, meals: MealPolicy) -> Self {
        Self { catalog, meals }
    }

    pub fn catalog(&self) -> &TableCatalog {
        &self.catalog
    }

    pub fn meal_policy(&self) -> &MealPolicy {
        &self.meals
    }

    /// Finds a table for a new request without moving anyone.
    ///
    /// The requested time snaps to the half-hour grid and the seating
    /// duration follows the meal period of the snapped time. Tables are
    /// scanned in catalog order; the first one with enough capacity and
    /// no overlapping booking on `date` wins. Returns `None` when every
    /// fitting table is taken.
    pub fn find_table(
        &self,
        date: NaiveDate,
        time: ClockTime,
        party_size: u32,
        bookings: &[Booking],
    ) -> Option<u32> {
        let start_time = time.round_to_half_hour();
        let start = start_time.minutes();
        let end = start + self.meals.duration_at(start_time);

        self.catalog
            .tables()
            .iter()
            .filter(|table| table.capacity >= party_size)
            .find(|table| {
                !bookings.iter().any(|b| {
                    b.date == date && b.table_id == Some(table.id) && {
                        let (b_start, b_end) = b.interval();
                        intervals_overlap(start, end, b_start, b_end)
                    }
                })
            })
            .map(|table| table.id)
    }

    /// Re-assigns every booking of one date from a clean slate.
    ///
    /// Bookings are packed largest party first (ties: earlier time
    /// first, then input order) and each goes to the tightest fitting
    /// table that is still free for its window. Times are snapped and
    /// durations re-derived from the meal policy, overwriting whatever
    /// the bookings carried in. Bookings that cannot be placed come
    /// back with `table_id == None`; none are dropped.
    ///
    /// Returns only the given date's bookings, in packing order.
    /// Running the result through `repack_day` again is a no-op.
    pub fn repack_day(&self, date: NaiveDate, bookings: &[Booking]) -> Vec<Booking> {
        let mut day: Vec<Booking> = bookings.iter().filter(|b| b.date == date).cloned().collect();
        day.sort_by(|a, b| {
            b.party_size
                .cmp(&a.party_size)
                .then_with(|| a.time.minutes().cmp(&b.time.minutes()))
        });

        let mut packed: Vec<Booking> = Vec::with_capacity(day.len());
        for mut booking in day {
            let start_time = booking.time.round_to_half_hour();
            let duration = self.meals.duration_at(start_time);
            let start = start_time.minutes();
            let end = start + duration;

            let table_id = self
                .catalog
                .tightest_fit(booking.party_size)
                .into_iter()
                .find(|table| {
                    !packed.iter().any(|p| {
                        p.table_id == Some(table.id) && {
                            let (p_start, p_end) = p.interval();
                            intervals_overlap(start, end, p_start, p_end)
                        }
                    })
                })
                .map(|table| table.id);

            booking.time = start_time;
            booking.duration_min = duration;
            booking.table_id = table_id;
            packed.push(booking);
        }

        let unseated = packed.iter().filter(|b| !b.is_seated()).count();
        debug!(%date, total = packed.len(), unseated, "Re-packed service day");
        packed
    }

    /// Bookable half-hour slots of the service day, earliest meal
    /// window start through latest window end
    pub fn service_slots(&self) -> Vec<ClockTime> {
        let (start, end) = MealPeriod::service_bounds();
        (start..=end)
            .step_by(SLOT_STEP_MIN as usize)
            .filter_map(ClockTime::from_minutes)
            .collect()
    }

    /// Slot-by-slot availability for a party size on one date
    pub fn availability_overview(
        &self,
        date: NaiveDate,
        party_size: u32,
        bookings: &[Booking],
    ) -> Vec<SlotAvailability> {
        self.service_slots()
            .into_iter()
            .map(|time| SlotAvailability {
                time,
                available: self.find_table(date, time, party_size, bookings).is_some(),
            })
            .collect()
    }
}
