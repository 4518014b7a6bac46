use super::*;
use chrono::NaiveDate;
use shared::types::ReservationStatus;

mod test_conflict;
mod test_status;
mod test_validate;

/// Fixed reference day so tests never depend on the wall clock
fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

/// Timestamp at `hour:minute` UTC on the reference day
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    day().and_hms_opt(hour, minute, 0).unwrap().and_utc()
}

fn policy() -> ReservationPolicy {
    ReservationPolicy {
        open: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        close: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        duration: Duration::hours(2),
        hourly_rate: Decimal::from(10),
        utc_offset_minutes: 0,
    }
}

fn interval(
    id: &str,
    start: (u32, u32),
    end: (u32, u32),
    status: ReservationStatus,
) -> ReservationInterval {
    ReservationInterval {
        id: Some(id.to_string()),
        start: Some(at(start.0, start.1)),
        end: Some(at(end.0, end.1)),
        status,
    }
}

fn walk_in(start: (u32, u32), end: (u32, u32)) -> ReservationInterval {
    ReservationInterval {
        id: None,
        start: Some(at(start.0, start.1)),
        end: Some(at(end.0, end.1)),
        status: ReservationStatus::Confirmed,
    }
}
