//! Reservation writer
//!
//! Every write that claims seat time funnels through here: customer
//! reservations, admin walk-ins, end-time extensions. The sequence is
//! always validate, lock the seats, re-check conflicts, persist — the
//! re-check under the lock is what closes the race between two requests
//! that both saw a free seat.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::types::ReservationStatus;
use surrealdb::RecordId;
use tracing::info;

use crate::availability::{self, ReservationInterval, ReservationPolicy, ReservationQuote};
use crate::core::ServerState;
use crate::db::DbService;
use crate::db::models::{LineItem, Reservation, Seat, WalkIn, WalkInCreate};
use crate::services::{Notifier, ReservationEvent};
use crate::utils::with_timeout;

/// Customer reservation request, seat ids in "seat:xyz" form
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub seat_ids: Vec<String>,
    pub guest_count: i32,
    pub start_time: Option<DateTime<Utc>>,
}

/// Admin walk-in request
#[derive(Debug, Clone)]
pub struct CreateWalkIn {
    pub seat_id: String,
    pub guest_count: i32,
    /// Defaults to now
    pub start_time: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

#[derive(Clone)]
pub struct ReservationWriter {
    db: DbService,
    policy: ReservationPolicy,
    locks: std::sync::Arc<super::SeatLocks>,
    versions: std::sync::Arc<crate::core::ResourceVersions>,
    notifier: Notifier,
    timeout_ms: u64,
}

impl ReservationWriter {
    pub fn from_state(state: &ServerState) -> Self {
        Self {
            db: state.db.clone(),
            policy: state.config.policy(),
            locks: state.seat_locks.clone(),
            versions: state.resource_versions.clone(),
            notifier: state.notifier.clone(),
            timeout_ms: state.config.request_timeout_ms,
        }
    }

    /// Create a customer reservation
    ///
    /// One row covers every selected seat. The cart is consumed: line
    /// items snapshot current prices and the cart is cleared after the
    /// row is persisted.
    pub async fn create_reservation(
        &self,
        customer: RecordId,
        req: CreateReservation,
    ) -> AppResult<Reservation> {
        let seats = self.load_seats(&req.seat_ids).await?;
        let capacities: Vec<i32> = seats.iter().map(|s| s.capacity).collect();

        let cart_items = self.db.cart().find_for_user(&customer).await?;
        let cart_quantity: i32 = cart_items.iter().map(|i| i.quantity).sum();

        let quote = availability::validate_reservation_request(
            &capacities,
            req.guest_count,
            cart_quantity,
            req.start_time,
            Utc::now(),
            &self.policy,
        )?;

        let items = self.snapshot_cart(&cart_items).await?;
        let subtotal: Decimal = items.iter().map(|i| i.line_total).sum();

        let _guards = self.locks.lock_many(&req.seat_ids).await;

        for seat in &seats {
            self.ensure_seat_free(seat, quote.start, quote.end, None)
                .await?;
        }

        let reservation = Reservation {
            id: None,
            seats: seats.iter().filter_map(|s| s.id.clone()).collect(),
            customer: Some(customer.clone()),
            guest_count: req.guest_count,
            start_time: Some(quote.start),
            end_time: Some(quote.end),
            status: ReservationStatus::Pending,
            items,
            subtotal,
            seat_fee: quote.seat_fee,
            total: subtotal + quote.seat_fee,
            payment_proof: None,
            created_at: Utc::now(),
        };

        let created = with_timeout(self.timeout_ms, async {
            Ok(self.db.reservations().create(reservation).await?)
        })
        .await?;

        self.db.cart().clear_for_user(&customer).await?;
        self.versions.increment("reservation");
        self.versions.increment("cart");

        if let Some(id) = created.id.as_ref() {
            info!(reservation = %id, "Reservation created");
            self.notifier.notify(ReservationEvent {
                event: "created".to_string(),
                reservation_id: id.to_string(),
                status: created.status.to_string(),
            });
        }

        Ok(created)
    }

    /// Create a walk-in for a single seat
    ///
    /// Walk-ins start immediately by default and share the reservation
    /// window policy, so a walk-in also ends at closing time.
    pub async fn create_walk_in(&self, req: CreateWalkIn) -> AppResult<WalkIn> {
        let seat = self.load_seat(&req.seat_id).await?;
        if req.guest_count <= 0 {
            return Err(AppError::validation("Guest count must be positive"));
        }

        let start = req.start_time.unwrap_or_else(Utc::now);
        if !self.policy.is_open_at(start) {
            return Err(AppError::validation(format!(
                "Walk-in start is outside operating hours ({}-{})",
                self.policy.open.format("%H:%M"),
                self.policy.close.format("%H:%M"),
            )));
        }
        let ReservationQuote { start, end, .. } = availability::quote_window(start, &self.policy);

        let _guards = self.locks.lock_many(std::slice::from_ref(&req.seat_id)).await;

        self.ensure_seat_free(&seat, start, end, None).await?;

        let created = with_timeout(self.timeout_ms, async {
            Ok(self
                .db
                .walk_ins()
                .create(WalkInCreate {
                    seat: seat.id.clone().ok_or_else(|| {
                        AppError::internal("Seat row without id")
                    })?,
                    guest_count: req.guest_count,
                    start_time: start,
                    end_time: end,
                    note: req.note,
                })
                .await?)
        })
        .await?;

        self.versions.increment("walk_in");
        Ok(created)
    }

    /// Extend a reservation's end time
    ///
    /// Re-runs the conflict check over `[start, new_end)` for every
    /// seat, excluding the reservation itself, then recomputes the seat
    /// fee for the longer window. The new end must stay on the right
    /// side of the start and within the closing boundary.
    pub async fn extend_end_time(
        &self,
        reservation_id: &str,
        new_end: DateTime<Utc>,
    ) -> AppResult<Reservation> {
        let reservation = self.load_reservation(reservation_id).await?;

        if reservation.status.is_terminal() {
            return Err(AppError::with_message(
                ErrorCode::ReservationClosed,
                format!("Reservation is already {}", reservation.status),
            ));
        }

        let start = reservation
            .start_time
            .ok_or_else(|| AppError::validation("Reservation has no start time"))?;
        if new_end <= start {
            return Err(AppError::validation("End time must be after the start time"));
        }
        if new_end > self.policy.close_instant(start) {
            return Err(AppError::validation(format!(
                "End time cannot run past closing time ({})",
                self.policy.close.format("%H:%M"),
            )));
        }

        let own_id = reservation
            .id
            .as_ref()
            .map(|id| id.to_string())
            .ok_or_else(|| AppError::internal("Reservation row without id"))?;

        let seat_ids: Vec<String> = reservation.seats.iter().map(|s| s.to_string()).collect();
        let _guards = self.locks.lock_many(&seat_ids).await;

        for seat_ref in &reservation.seats {
            let seat = self.load_seat(&seat_ref.to_string()).await?;
            self.ensure_seat_free(&seat, start, new_end, Some(&own_id))
                .await?;
        }

        let minutes = (new_end - start).num_minutes().max(0);
        let seat_fee = Decimal::from(minutes) / Decimal::from(60) * self.policy.hourly_rate;
        let total = reservation.subtotal + seat_fee;

        let updated = with_timeout(self.timeout_ms, async {
            Ok(self
                .db
                .reservations()
                .update_end_time(&own_id, new_end, seat_fee, total)
                .await?)
        })
        .await?;

        self.versions.increment("reservation");
        self.notifier.notify(ReservationEvent {
            event: "extended".to_string(),
            reservation_id: own_id,
            status: updated.status.to_string(),
        });

        Ok(updated)
    }

    /// Move a reservation along its lifecycle
    ///
    /// Only adjacent transitions are legal; anything else is rejected
    /// naming both states.
    pub async fn transition_status(
        &self,
        reservation_id: &str,
        next: ReservationStatus,
    ) -> AppResult<Reservation> {
        let reservation = self.load_reservation(reservation_id).await?;

        if !reservation.status.can_transition_to(next) {
            return Err(AppError::with_message(
                ErrorCode::InvalidStatusTransition,
                format!(
                    "Cannot transition reservation from {} to {}",
                    reservation.status, next
                ),
            ));
        }

        let own_id = reservation
            .id
            .as_ref()
            .map(|id| id.to_string())
            .ok_or_else(|| AppError::internal("Reservation row without id"))?;

        let updated = with_timeout(self.timeout_ms, async {
            Ok(self.db.reservations().update_status(&own_id, next).await?)
        })
        .await?;

        info!(reservation = %own_id, from = %reservation.status, to = %next, "Status changed");
        self.versions.increment("reservation");
        self.notifier.notify(ReservationEvent {
            event: "status_changed".to_string(),
            reservation_id: own_id,
            status: next.to_string(),
        });

        Ok(updated)
    }

    // ==================== internals ====================

    async fn load_seat(&self, seat_id: &str) -> AppResult<Seat> {
        let seat = self
            .db
            .seats()
            .find_by_id(seat_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Seat {}", seat_id)))?;
        if !seat.is_active {
            return Err(AppError::validation(format!(
                "Seat '{}' is not available for booking",
                seat.name
            )));
        }
        Ok(seat)
    }

    async fn load_seats(&self, seat_ids: &[String]) -> AppResult<Vec<Seat>> {
        let mut seats = Vec::with_capacity(seat_ids.len());
        for id in seat_ids {
            seats.push(self.load_seat(id).await?);
        }
        Ok(seats)
    }

    async fn load_reservation(&self, id: &str) -> AppResult<Reservation> {
        self.db
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::ReservationNotFound,
                    format!("Reservation {} not found", id),
                )
            })
    }

    /// Gather a seat's blocking intervals and run the conflict check
    async fn ensure_seat_free(
        &self,
        seat: &Seat,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_id: Option<&str>,
    ) -> AppResult<()> {
        let seat_ref = seat
            .id
            .as_ref()
            .ok_or_else(|| AppError::internal("Seat row without id"))?;

        let mut intervals: Vec<ReservationInterval> = self
            .db
            .reservations()
            .find_blocking_for_seat(seat_ref)
            .await?
            .iter()
            .map(Reservation::interval)
            .collect();
        intervals.extend(
            self.db
                .walk_ins()
                .find_for_seat(seat_ref)
                .await?
                .iter()
                .map(WalkIn::interval),
        );

        if availability::has_conflict(start, end, &intervals, exclude_id) {
            return Err(AppError::seat_unavailable(format!(
                "Seat '{}' is already booked for the selected time",
                seat.name
            )));
        }
        Ok(())
    }

    /// Snapshot cart rows into line items at current prices
    async fn snapshot_cart(
        &self,
        cart_items: &[crate::db::models::CartItem],
    ) -> AppResult<Vec<LineItem>> {
        let mut items = Vec::with_capacity(cart_items.len());
        for cart_item in cart_items {
            let product_id = cart_item.product.to_string();
            let product = self
                .db
                .products()
                .find_by_id(&product_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Product {}", product_id)))?;

            let unit_price = product.unit_price(cart_item.size.as_deref());
            items.push(LineItem {
                product: cart_item.product.clone(),
                name: product.name,
                quantity: cart_item.quantity,
                unit_price,
                size: cart_item.size.clone(),
                line_total: unit_price * Decimal::from(cart_item.quantity),
            });
        }
        Ok(items)
    }
}
