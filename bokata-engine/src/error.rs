//! Error types for the booking engine

use std::fmt;

use thiserror::Error;

/// Request field checked during intake validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Name,
    Date,
    Time,
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestField::Name => "name",
            RequestField::Date => "date",
            RequestField::Time => "time",
        };
        write!(f, "{}", label)
    }
}

/// Booking error types
///
/// Validation runs in a fixed order and stops at the first failure,
/// so a request missing several fields reports only the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// A required request field is empty or absent
    #[error("Required field missing: {0}")]
    MissingField(RequestField),

    /// Party size below one
    #[error("Party size must be at least 1")]
    InvalidPartySize,

    /// Party too large for automatic seating, staff must confirm
    #[error("Party of {party_size} exceeds the automatic limit of {limit}, manual confirmation required")]
    RequiresManualReview { party_size: u32, limit: u32 },

    /// No table with enough capacity is free in the requested window
    #[error("No suitable table is free in this time window")]
    NoCapacity,
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
