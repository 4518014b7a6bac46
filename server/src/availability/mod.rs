//! Seat availability engine
//!
//! The single authoritative implementation of seat status computation,
//! interval conflict detection and reservation request validation. Both the
//! customer booking flow and the admin seat map go through this module —
//! status is never stored, always derived (客户端不再重复计算).
//!
//! All functions here are pure: same inputs, same outputs, no I/O.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rust_decimal::Decimal;
use shared::error::AppError;
use shared::types::{ReservationStatus, SeatStatus};

#[cfg(test)]
mod tests;

/// A reservation projected onto the time axis
///
/// Built from either a reservation row or a walk-in row (walk-ins carry no
/// lifecycle status and are mapped to [`ReservationStatus::Confirmed`]).
/// Missing endpoints are legal — such intervals never block anything.
#[derive(Debug, Clone)]
pub struct ReservationInterval {
    pub id: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub status: ReservationStatus,
}

impl ReservationInterval {
    /// Half-open containment check: `start <= at < end`
    ///
    /// Returns false when either endpoint is missing.
    fn covers(&self, at: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= at && at < end,
            _ => false,
        }
    }
}

/// Standard half-open interval overlap test
///
/// `[a_start, a_end)` overlaps `[b_start, b_end)` iff
/// `a_start < b_end && b_start < a_end`. Touching endpoints do not overlap.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Compute a seat's display status at a single instant
///
/// Precedence (matching the observed evaluation order):
/// 1. a `Completed` reservation covering `at` → [`SeatStatus::Occupied`]
/// 2. an active (non-Completed, non-Canceled) reservation covering `at`
///    → [`SeatStatus::Reserved`]
/// 3. a walk-in covering `at` → [`SeatStatus::Occupied`]
/// 4. otherwise → [`SeatStatus::Available`]
pub fn seat_status(
    reservations: &[ReservationInterval],
    walk_ins: &[ReservationInterval],
    at: DateTime<Utc>,
) -> SeatStatus {
    if reservations
        .iter()
        .any(|r| r.status == ReservationStatus::Completed && r.covers(at))
    {
        return SeatStatus::Occupied;
    }

    if reservations
        .iter()
        .any(|r| r.status.is_active() && r.covers(at))
    {
        return SeatStatus::Reserved;
    }

    if walk_ins.iter().any(|w| w.covers(at)) {
        return SeatStatus::Occupied;
    }

    SeatStatus::Available
}

/// Check a candidate window against a seat's existing intervals
///
/// Canceled intervals and intervals with a missing endpoint never
/// conflict. `exclude_id` skips the interval currently being edited
/// (end-time extension re-checks against everything else).
pub fn has_conflict(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    existing: &[ReservationInterval],
    exclude_id: Option<&str>,
) -> bool {
    existing.iter().any(|interval| {
        if interval.status == ReservationStatus::Canceled {
            return false;
        }
        if let (Some(exclude), Some(id)) = (exclude_id, interval.id.as_deref())
            && exclude == id
        {
            return false;
        }
        match (interval.start, interval.end) {
            (Some(start), Some(end)) => overlaps(candidate_start, candidate_end, start, end),
            _ => false,
        }
    })
}

/// Operating window and pricing policy for reservations
///
/// Sourced from [`Config`](crate::core::Config); defaults match the
/// observed business rules (10:00–22:00, 2-hour slots, 10 units/hour).
#[derive(Debug, Clone)]
pub struct ReservationPolicy {
    /// Opening time, business-local
    pub open: NaiveTime,
    /// Closing time, business-local; reservations never extend past it
    pub close: NaiveTime,
    /// Default reservation duration
    pub duration: Duration,
    /// Seat-time fee per hour
    pub hourly_rate: Decimal,
    /// Offset of business-local time from UTC, in minutes
    pub utc_offset_minutes: i32,
}

impl ReservationPolicy {
    fn local_time(&self, at: DateTime<Utc>) -> NaiveTime {
        (at + Duration::minutes(self.utc_offset_minutes as i64)).time()
    }

    /// True when `at` falls inside the business-local operating window
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        let local = self.local_time(at);
        local >= self.open && local < self.close
    }

    /// Closing instant on the business-local day containing `at`
    pub fn close_instant(&self, at: DateTime<Utc>) -> DateTime<Utc> {
        let offset = Duration::minutes(self.utc_offset_minutes as i64);
        let close_local = (at + offset).date_naive().and_time(self.close);
        close_local.and_utc() - offset
    }
}

/// A validated reservation window with its derived fee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationQuote {
    pub start: DateTime<Utc>,
    /// `start + duration`, capped at closing time
    pub end: DateTime<Utc>,
    /// Capped duration in hours × hourly rate, exact decimal
    pub seat_fee: Decimal,
}

/// Validate a reservation request and derive its window and fee
///
/// Checks run in order and short-circuit on the first failure, each with
/// its own message:
/// 1. at least one seat selected
/// 2. start time present, within operating hours, not in the past
/// 3. summed seat capacity covers the guest count
/// 4. cart quantity total covers the summed seat capacity
pub fn validate_reservation_request(
    seat_capacities: &[i32],
    guest_count: i32,
    cart_quantity_total: i32,
    start: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    policy: &ReservationPolicy,
) -> Result<ReservationQuote, AppError> {
    if seat_capacities.is_empty() {
        return Err(AppError::validation("Please select at least one seat"));
    }

    let start = start.ok_or_else(|| AppError::validation("Please select a start time"))?;

    if !policy.is_open_at(start) {
        return Err(AppError::validation(format!(
            "Start time is outside operating hours ({}-{})",
            policy.open.format("%H:%M"),
            policy.close.format("%H:%M"),
        )));
    }

    if start < now {
        return Err(AppError::validation("Start time is in the past"));
    }

    let total_capacity: i32 = seat_capacities.iter().sum();
    if total_capacity < guest_count {
        return Err(AppError::validation(format!(
            "Seat capacity insufficient: {} guests exceed the selected capacity of {}",
            guest_count, total_capacity,
        )));
    }

    if cart_quantity_total < total_capacity {
        return Err(AppError::validation(format!(
            "Cart must contain at least {} items to cover the reserved capacity",
            total_capacity,
        )));
    }

    Ok(quote_window(start, policy))
}

/// Derive the end time and seat fee for a start instant
///
/// End is `start + duration`, pulled back to closing time when it would
/// run past it. Fee is exact: minutes / 60 × hourly rate.
///
/// Callers must have checked `is_open_at(start)` first; a start at or
/// after closing would otherwise quote an inverted window.
pub fn quote_window(start: DateTime<Utc>, policy: &ReservationPolicy) -> ReservationQuote {
    let natural_end = start + policy.duration;
    let end = natural_end.min(policy.close_instant(start));

    let minutes = (end - start).num_minutes().max(0);
    let seat_fee = Decimal::from(minutes) / Decimal::from(60) * policy.hourly_rate;

    ReservationQuote {
        start,
        end,
        seat_fee,
    }
}
