//! Reservation desk for the Bokäta table-assignment system
//!
//! Stateful layer over [`bokata_engine`]: per-date booking storage
//! with serialized mutations, snapshot/restore for persistence, and
//! the read-side day reports the dashboard renders.

pub mod desk;
pub mod report;

// Re-exports (engine types the desk API surfaces)
pub use bokata_engine::{
    Booking, BookingError, BookingRequest, BookingResult, ClockTime, DiningTable, IntakePolicy,
    MealPeriod, MealPolicy, SeatingEngine, SlotAvailability, TableCatalog,
};

pub use desk::ReservationDesk;
pub use report::{bookings_by_slot, DaySummary, HourWindow, MealGuests};
