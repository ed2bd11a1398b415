//! Snapshot import racing live intake
//!
//! An import swaps each date in whole, so a booking taken while the
//! import runs can be superseded but never merged half-way into a
//! restored date. Whatever the interleaving, the restored rows survive
//! and every table ends the day within capacity and free of double
//! seatings.

use std::sync::Arc;
use std::thread;

use bokata_desk::{Booking, BookingRequest, ClockTime, ReservationDesk};
use chrono::NaiveDate;

fn service_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 5).expect("valid date")
}

fn t(s: &str) -> ClockTime {
    s.parse().expect("valid time")
}

fn request(name: &str, time: &str, party_size: u32) -> BookingRequest {
    BookingRequest {
        name: name.to_string(),
        date: Some(service_date()),
        time: Some(t(time)),
        party_size,
        notes: None,
    }
}

fn seed_booking(id: &str, name: &str, time: &str, table_id: u32) -> Booking {
    Booking {
        id: id.to_string(),
        date: service_date(),
        time: t(time),
        party_size: 2,
        duration_min: 90,
        table_id: Some(table_id),
        name: name.to_string(),
        notes: None,
    }
}

fn assert_day_is_consistent(desk: &ReservationDesk, date: NaiveDate) {
    let day = desk.bookings_for(date);
    for a in day.iter().filter(|b| b.is_seated()) {
        let table = desk
            .engine()
            .catalog()
            .get(a.table_id.expect("seated"))
            .expect("known table");
        assert!(
            table.capacity >= a.party_size,
            "{} seated over capacity",
            a.name
        );
        for b in day.iter().filter(|b| b.is_seated()) {
            if a.id != b.id && a.table_id == b.table_id {
                let (a_start, a_end) = a.interval();
                let (b_start, b_end) = b.interval();
                assert!(
                    a_end <= b_start || b_end <= a_start,
                    "{} and {} overlap on table {:?}",
                    a.name,
                    b.name,
                    a.table_id
                );
            }
        }
    }
}

#[test]
fn test_restore_during_live_intake_keeps_days_consistent() {
    let desk = Arc::new(ReservationDesk::default());
    let seed = vec![
        seed_booking("seed-emma", "Emma Larsson", "11:00", 1),
        seed_booking("seed-klara", "Klara Nyman", "11:30", 2),
    ];

    let writer = {
        let desk = Arc::clone(&desk);
        thread::spawn(move || {
            for i in 0..60 {
                // Couples spread over lunch and dinner; a full day may
                // reject some of them
                let time = if i % 2 == 0 { "11:00" } else { "18:00" };
                let _ = desk.create(&request(&format!("Par {}", i), time, 2));
            }
        })
    };
    for _ in 0..20 {
        desk.restore(seed.clone());
    }
    writer.join().expect("intake thread finished");

    // The last import is authoritative for its rows; walk-ins taken
    // after it only add to the restored day
    let day = desk.bookings_for(service_date());
    for id in ["seed-emma", "seed-klara"] {
        assert!(
            day.iter().any(|b| b.id == id),
            "restored booking {} missing",
            id
        );
    }
    assert_day_is_consistent(&desk, service_date());
}
