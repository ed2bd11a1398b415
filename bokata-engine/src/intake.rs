//! Reservation intake
//!
//! Validates create requests in a fixed order; the first failing check
//! decides the error and the existing booking set is never touched on
//! failure. A request that passes every check comes back as a seated
//! [`Booking`] ready to append and re-pack.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::{Booking, BookingRequest};
use crate::error::{BookingError, BookingResult, RequestField};
use crate::seating::SeatingEngine;

/// Intake limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakePolicy {
    /// Largest party seated without staff confirmation
    pub max_party_size: u32,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self { max_party_size: 22 }
    }
}

/// Validates a request and builds the booking it describes.
///
/// Check order: name, date, time, party size floor, party size
/// ceiling, then table search. Parties above `policy.max_party_size`
/// are refused with [`BookingError::RequiresManualReview`] rather than
/// auto-seated; a party exactly at the limit still qualifies.
pub fn create_reservation(
    engine: &SeatingEngine,
    policy: &IntakePolicy,
    request: &BookingRequest,
    bookings: &[Booking],
) -> BookingResult<Booking> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(BookingError::MissingField(RequestField::Name));
    }
    let date = request
        .date
        .ok_or(BookingError::MissingField(RequestField::Date))?;
    let time = request
        .time
        .ok_or(BookingError::MissingField(RequestField::Time))?;
    if request.party_size < 1 {
        return Err(BookingError::InvalidPartySize);
    }
    if request.party_size > policy.max_party_size {
        return Err(BookingError::RequiresManualReview {
            party_size: request.party_size,
            limit: policy.max_party_size,
        });
    }

    let time = time.round_to_half_hour();
    let table_id = engine
        .find_table(date, time, request.party_size, bookings)
        .ok_or(BookingError::NoCapacity)?;

    Ok(Booking {
        id: Uuid::new_v4().to_string(),
        date,
        time,
        party_size: request.party_size,
        duration_min: engine.meal_policy().duration_at(time),
        table_id: Some(table_id),
        name: name.to_string(),
        notes: request.notes.clone(),
    })
}
