//! Table-assignment engine for the Bokäta reservation system
//!
//! Pure seating logic for a single restaurant: clock-time handling on
//! a half-hour grid, meal-period classification, a fixed table
//! catalog, and the two assignment policies (incremental first-fit
//! lookups and whole-day re-packs). The engine holds no booking state;
//! the desk crate owns storage and calls in here.

pub mod booking;
pub mod error;
pub mod intake;
pub mod meal;
pub mod seating;
pub mod table;
pub mod time;

// Re-exports
pub use booking::{Booking, BookingRequest};
pub use error::{BookingError, BookingResult, RequestField};
pub use intake::{create_reservation, IntakePolicy};
pub use meal::{MealPeriod, MealPolicy};
pub use seating::{SeatingEngine, SlotAvailability, SLOT_STEP_MIN};
pub use table::{DiningTable, TableCatalog};
pub use time::{ClockTime, ParseClockTimeError};
