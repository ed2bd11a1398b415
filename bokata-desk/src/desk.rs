//! Reservation desk
//!
//! The stateful front of the system: owns every date's booking list
//! and serializes mutations per date. Engine calls are pure, so all
//! concurrency control lives here; a [`DashMap`] entry guard is held
//! across the whole validate-append-repack sequence, which makes each
//! date's read-modify-write atomic while leaving other dates free.

use std::collections::HashMap;

use bokata_engine::booking::{Booking, BookingRequest};
use bokata_engine::error::{BookingError, BookingResult, RequestField};
use bokata_engine::intake::{create_reservation, IntakePolicy};
use bokata_engine::seating::{SeatingEngine, SlotAvailability};
use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::{info, warn};

use crate::report::DaySummary;

/// Booking state for one restaurant, keyed by service date
#[derive(Debug, Default)]
pub struct ReservationDesk {
    engine: SeatingEngine,
    policy: IntakePolicy,
    days: DashMap<NaiveDate, Vec<Booking>>,
}

impl ReservationDesk {
    pub fn new(engine: SeatingEngine, policy: IntakePolicy) -> Self {
        Self {
            engine,
            policy,
            days: DashMap::new(),
        }
    }

    pub fn engine(&self) -> &SeatingEngine {
        &self.engine
    }

    /// Takes a reservation request end to end: validate, seat, append,
    /// re-pack the date.
    ///
    /// Returns the booking as stored after the re-pack, so the table in
    /// the response is the one the guest will actually sit at even when
    /// the re-pack shuffled earlier assignments. On any error the
    /// stored state is untouched.
    pub fn create(&self, request: &BookingRequest) -> BookingResult<Booking> {
        let Some(date) = request.date else {
            // Without a date there is no entry to guard, and intake
            // cannot succeed; run it anyway so the reported field
            // follows the usual check order.
            let error = create_reservation(&self.engine, &self.policy, request, &[])
                .err()
                .unwrap_or(BookingError::MissingField(RequestField::Date));
            warn!(%error, "Reservation rejected");
            return Err(error);
        };

        let mut day = self.days.entry(date).or_default();
        let booking = match create_reservation(&self.engine, &self.policy, request, &day) {
            Ok(booking) => booking,
            Err(error) => {
                warn!(%date, %error, "Reservation rejected");
                return Err(error);
            }
        };

        day.push(booking.clone());
        *day = self.engine.repack_day(date, &day);

        let seated = day
            .iter()
            .find(|b| b.id == booking.id)
            .cloned()
            .unwrap_or(booking);
        let unseated = day.iter().filter(|b| !b.is_seated()).count();
        if unseated > 0 {
            warn!(%date, unseated, "Parties left without a table after re-pack");
        }
        info!(
            %date,
            name = %seated.name,
            party_size = seated.party_size,
            table = ?seated.table_id,
            "Reservation created"
        );
        Ok(seated)
    }

    /// One date's bookings, earliest first
    pub fn bookings_for(&self, date: NaiveDate) -> Vec<Booking> {
        let mut day = self
            .days
            .get(&date)
            .map(|d| d.value().clone())
            .unwrap_or_default();
        day.sort_by_key(|b| b.time);
        day
    }

    /// Re-packs one date in place and returns the result
    pub fn repack(&self, date: NaiveDate) -> Vec<Booking> {
        match self.days.get_mut(&date) {
            Some(mut day) => {
                *day = self.engine.repack_day(date, &day);
                day.value().clone()
            }
            None => Vec::new(),
        }
    }

    /// Dates that have at least one booking, ascending
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .days
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| *entry.key())
            .collect();
        dates.sort();
        dates
    }

    /// Every booking across all dates, ordered by date, time, name
    pub fn snapshot(&self) -> Vec<Booking> {
        let mut all: Vec<Booking> = self
            .days
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.time.cmp(&b.time))
                .then_with(|| a.name.cmp(&b.name))
        });
        all
    }

    /// Replaces all state with a previously exported snapshot.
    ///
    /// Each date's set is swapped in whole, so no reader or writer
    /// ever observes a half-restored date. Imports are meant to run
    /// before live traffic; a [`Self::create`] racing the import on
    /// the same date is superseded by the snapshot.
    ///
    /// Stored assignments are trusted as-is; call [`Self::repack`] per
    /// date to re-derive them.
    pub fn restore(&self, bookings: Vec<Booking>) {
        let total = bookings.len();
        let mut grouped: HashMap<NaiveDate, Vec<Booking>> = HashMap::new();
        for booking in bookings {
            grouped.entry(booking.date).or_default().push(booking);
        }
        self.days.retain(|date, _| grouped.contains_key(date));
        for (date, day) in grouped {
            self.days.insert(date, day);
        }
        info!(total, dates = self.days.len(), "Restored booking state");
    }

    /// Aggregates for one service date
    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        let day = self
            .days
            .get(&date)
            .map(|d| d.value().clone())
            .unwrap_or_default();
        DaySummary::calculate(&day)
    }

    /// Slot-by-slot availability on one date for a party size
    pub fn availability(&self, date: NaiveDate, party_size: u32) -> Vec<SlotAvailability> {
        let day = self
            .days
            .get(&date)
            .map(|d| d.value().clone())
            .unwrap_or_default();
        self.engine.availability_overview(date, party_size, &day)
    }
}
