use super::*;

// ========================================================================
// seat_status 推导
// ========================================================================

#[test]
fn test_empty_seat_is_available() {
    assert_eq!(seat_status(&[], &[], at(12, 0)), SeatStatus::Available);
}

#[test]
fn test_active_reservation_marks_reserved() {
    let orders = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Pending)];
    assert_eq!(seat_status(&orders, &[], at(12, 30)), SeatStatus::Reserved);
    assert_eq!(seat_status(&orders, &[], at(12, 0)), SeatStatus::Reserved);
}

#[test]
fn test_completed_reservation_marks_occupied() {
    let orders = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Completed)];
    assert_eq!(seat_status(&orders, &[], at(13, 0)), SeatStatus::Occupied);
}

#[test]
fn test_walk_in_marks_occupied() {
    let walk_ins = vec![walk_in((12, 0), (13, 0))];
    assert_eq!(seat_status(&[], &walk_ins, at(12, 30)), SeatStatus::Occupied);
}

#[test]
fn test_canceled_reservation_never_blocks() {
    let orders = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Canceled)];
    assert_eq!(seat_status(&orders, &[], at(13, 0)), SeatStatus::Available);
}

#[test]
fn test_half_open_end_is_free() {
    // 结束时刻本身不算占用
    let orders = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Confirmed)];
    assert_eq!(seat_status(&orders, &[], at(14, 0)), SeatStatus::Available);
}

#[test]
fn test_completed_takes_priority_over_active() {
    // Evaluation order: completed first, then active, then walk-ins.
    let orders = vec![
        interval("r1", (12, 0), (14, 0), ReservationStatus::Completed),
        interval("r2", (12, 0), (14, 0), ReservationStatus::Confirmed),
    ];
    assert_eq!(seat_status(&orders, &[], at(13, 0)), SeatStatus::Occupied);
}

#[test]
fn test_missing_endpoint_is_skipped() {
    let orders = vec![ReservationInterval {
        id: Some("r1".into()),
        start: Some(at(12, 0)),
        end: None,
        status: ReservationStatus::Confirmed,
    }];
    assert_eq!(seat_status(&orders, &[], at(13, 0)), SeatStatus::Available);
}

#[test]
fn test_status_is_pure() {
    let orders = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Pending)];
    let walk_ins = vec![walk_in((15, 0), (16, 0))];
    let first = seat_status(&orders, &walk_ins, at(12, 30));
    for _ in 0..10 {
        assert_eq!(seat_status(&orders, &walk_ins, at(12, 30)), first);
    }
}
