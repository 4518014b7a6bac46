//! Statistics API handlers
//!
//! Aggregation happens in Rust over plain row fetches; canceled
//! reservations are excluded from every metric.

use axum::{Json, extract::State};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::AppResult;
use shared::types::ReservationStatus;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct Overview {
    pub total_reservations: usize,
    pub active_reservations: usize,
    /// Sum of totals over completed reservations
    pub completed_revenue: Decimal,
    /// Reservations created in the last 7 days
    pub last_week: usize,
    /// Reservations created in the 7 days before that
    pub previous_week: usize,
    /// Week-over-week growth in percent, None when the previous week
    /// had no reservations
    pub growth_percent: Option<f64>,
}

/// GET /api/statistics/overview
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<Overview>> {
    let rows = state.db.reservations().find_not_canceled().await?;
    let now = Utc::now();
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let total_reservations = rows.len();
    let active_reservations = rows.iter().filter(|r| r.status.is_active()).count();
    let completed_revenue: Decimal = rows
        .iter()
        .filter(|r| r.status == ReservationStatus::Completed)
        .map(|r| r.total)
        .sum();

    let last_week = rows.iter().filter(|r| r.created_at >= week_ago).count();
    let previous_week = rows
        .iter()
        .filter(|r| r.created_at >= two_weeks_ago && r.created_at < week_ago)
        .count();

    let growth_percent = if previous_week > 0 {
        Some(((last_week as f64 - previous_week as f64) / previous_week as f64) * 100.0)
    } else {
        None
    };

    Ok(Json(Overview {
        total_reservations,
        active_reservations,
        completed_revenue,
        last_week,
        previous_week,
        growth_percent,
    }))
}

#[derive(Debug, Serialize)]
pub struct PeakHours {
    /// Reservation starts per business-local hour, index 0-23
    pub by_hour: [usize; 24],
    /// Busiest hour, None when there is no data
    pub peak_hour: Option<usize>,
}

/// GET /api/statistics/peak-hours
pub async fn peak_hours(State(state): State<ServerState>) -> AppResult<Json<PeakHours>> {
    use chrono::Timelike;

    let rows = state.db.reservations().find_not_canceled().await?;
    let offset = Duration::minutes(state.config.utc_offset_minutes as i64);

    let mut by_hour = [0usize; 24];
    for row in &rows {
        if let Some(start) = row.start_time {
            let hour = (start + offset).hour() as usize;
            by_hour[hour] += 1;
        }
    }

    Ok(Json(PeakHours {
        peak_hour: busiest_hour(&by_hour),
        by_hour,
    }))
}

/// Hour with the highest count, None when every bucket is empty
fn busiest_hour(by_hour: &[usize; 24]) -> Option<usize> {
    by_hour
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .max_by_key(|(_, count)| **count)
        .map(|(hour, _)| hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busiest_hour_picks_the_fullest_bucket() {
        let mut by_hour = [0usize; 24];
        by_hour[12] = 3;
        by_hour[18] = 7;
        by_hour[20] = 2;
        assert_eq!(busiest_hour(&by_hour), Some(18));
    }

    #[test]
    fn busiest_hour_is_none_without_data() {
        assert_eq!(busiest_hour(&[0usize; 24]), None);
    }
}
