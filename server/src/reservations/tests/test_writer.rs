//! Creation-path tests: validation, conflicts, the booking race

use super::*;
use crate::availability;
use crate::db::models::{Reservation, WalkIn};
use crate::reservations::{CreateReservation, CreateWalkIn};
use shared::error::ErrorCode;
use shared::types::{ReservationStatus, SeatStatus};

#[tokio::test]
async fn create_reservation_happy_path() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "window-1", 2).await;
    let alice = customer("alice");
    fill_cart(&state, &alice, 3).await;

    let start = tomorrow_at(14);
    let created = writer
        .create_reservation(
            alice.clone(),
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 2,
                start_time: Some(start),
            },
        )
        .await
        .expect("create reservation");

    assert_eq!(created.status, ReservationStatus::Pending);
    assert_eq!(created.start_time, Some(start));
    assert_eq!(created.end_time, Some(start + chrono::Duration::hours(2)));
    // 2 hours at 10/hour
    assert_eq!(created.seat_fee, Decimal::from(20));
    // 3 × 4.5 + 20
    assert_eq!(created.subtotal, Decimal::new(135, 1));
    assert_eq!(created.total, Decimal::new(335, 1));

    // cart consumed
    let remaining = state.db.cart().find_for_user(&alice).await.unwrap();
    assert!(remaining.is_empty());

    assert_eq!(state.resource_versions.get("reservation"), 1);
}

#[tokio::test]
async fn create_rejects_undersized_cart() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "booth-4", 4).await;
    let alice = customer("alice");
    fill_cart(&state, &alice, 2).await; // capacity 4 needs 4 items

    let err = writer
        .create_reservation(
            alice,
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 3,
                start_time: Some(tomorrow_at(14)),
            },
        )
        .await
        .expect_err("should reject");

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(err.message.contains("at least 4 items"));
}

#[tokio::test]
async fn overlapping_reservation_is_rejected() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "window-1", 2).await;

    let alice = customer("alice");
    fill_cart(&state, &alice, 2).await;
    writer
        .create_reservation(
            alice,
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 2,
                start_time: Some(tomorrow_at(14)),
            },
        )
        .await
        .expect("first reservation");

    let bob = customer("bob");
    fill_cart(&state, &bob, 2).await;
    let err = writer
        .create_reservation(
            bob,
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 2,
                start_time: Some(tomorrow_at(15)), // inside [14, 16)
            },
        )
        .await
        .expect_err("overlap must be rejected");

    assert_eq!(err.code, ErrorCode::SeatUnavailable);
    assert!(err.message.contains("window-1"));
}

#[tokio::test]
async fn adjacent_windows_share_the_boundary() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "window-1", 2).await;

    let alice = customer("alice");
    fill_cart(&state, &alice, 2).await;
    writer
        .create_reservation(
            alice,
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 2,
                start_time: Some(tomorrow_at(12)), // [12, 14)
            },
        )
        .await
        .expect("first reservation");

    let bob = customer("bob");
    fill_cart(&state, &bob, 2).await;
    // starts exactly where the first one ends
    writer
        .create_reservation(
            bob,
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 2,
                start_time: Some(tomorrow_at(14)), // [14, 16)
            },
        )
        .await
        .expect("back-to-back booking must succeed");
}

#[tokio::test]
async fn concurrent_bookings_leave_exactly_one_winner() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "window-1", 2).await;

    let alice = customer("alice");
    let bob = customer("bob");
    fill_cart(&state, &alice, 2).await;
    fill_cart(&state, &bob, 2).await;

    let sid = seat_id(&seat);
    let start = tomorrow_at(14);
    let req = |c: surrealdb::RecordId| {
        writer.create_reservation(
            c,
            CreateReservation {
                seat_ids: vec![sid.clone()],
                guest_count: 2,
                start_time: Some(start),
            },
        )
    };

    let (a, b) = tokio::join!(req(alice), req(bob));

    let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "exactly one booking must win the race");

    let loser = if a.is_err() { a } else { b };
    assert_eq!(loser.unwrap_err().code, ErrorCode::SeatUnavailable);
}

#[tokio::test]
async fn walk_in_blocks_the_seat() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "counter-2", 1).await;

    let start = tomorrow_at(14);
    let walk_in: WalkIn = writer
        .create_walk_in(CreateWalkIn {
            seat_id: seat_id(&seat),
            guest_count: 1,
            start_time: Some(start),
            note: Some("regular".to_string()),
        })
        .await
        .expect("walk-in");
    assert_eq!(walk_in.end_time, Some(start + chrono::Duration::hours(2)));

    let alice = customer("alice");
    fill_cart(&state, &alice, 1).await;
    let err = writer
        .create_reservation(
            alice,
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 1,
                start_time: Some(tomorrow_at(15)),
            },
        )
        .await
        .expect_err("walk-in occupies the seat");

    assert_eq!(err.code, ErrorCode::SeatUnavailable);
}

#[tokio::test]
async fn walk_in_window_is_capped_at_close() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "counter-2", 1).await;

    let start = tomorrow_at(21); // one hour before close
    let walk_in = writer
        .create_walk_in(CreateWalkIn {
            seat_id: seat_id(&seat),
            guest_count: 1,
            start_time: Some(start),
            note: None,
        })
        .await
        .expect("walk-in");

    assert_eq!(walk_in.end_time, Some(tomorrow_at(22)));
}

#[tokio::test]
async fn walk_in_outside_operating_hours_is_rejected() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "counter-2", 1).await;

    let err = writer
        .create_walk_in(CreateWalkIn {
            seat_id: seat_id(&seat),
            guest_count: 1,
            start_time: Some(tomorrow_at(23)), // past the 22:00 close
            note: None,
        })
        .await
        .expect_err("no seating after close");

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(err.message.contains("operating hours"));

    // nothing persisted: a post-close start must never become a row
    // with end before start
    let rows = state.db.walk_ins().find_all().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn derived_status_is_reserved_inside_the_window() {
    let (state, writer) = setup().await;
    let seat = seed_seat(&state, "window-1", 2).await;
    let alice = customer("alice");
    fill_cart(&state, &alice, 2).await;

    let start = tomorrow_at(14);
    writer
        .create_reservation(
            alice,
            CreateReservation {
                seat_ids: vec![seat_id(&seat)],
                guest_count: 2,
                start_time: Some(start),
            },
        )
        .await
        .expect("create");

    let seat_ref = seat.id.as_ref().unwrap();
    let reservations: Vec<_> = state
        .db
        .reservations()
        .find_for_seat(seat_ref)
        .await
        .unwrap()
        .iter()
        .map(Reservation::interval)
        .collect();

    let status = availability::seat_status(
        &reservations,
        &[],
        start + chrono::Duration::minutes(30),
    );
    assert_eq!(status, SeatStatus::Reserved);

    let before = availability::seat_status(
        &reservations,
        &[],
        start - chrono::Duration::minutes(1),
    );
    assert_eq!(before, SeatStatus::Available);
}
