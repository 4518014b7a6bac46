use super::*;

// ========================================================================
// validate_reservation_request 校验顺序与报错信息
// ========================================================================

#[test]
fn test_requires_a_seat() {
    let err = validate_reservation_request(&[], 2, 4, Some(at(14, 0)), at(9, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("at least one seat"));
}

#[test]
fn test_requires_a_start_time() {
    let err = validate_reservation_request(&[4], 2, 4, None, at(9, 0), &policy()).unwrap_err();
    assert!(err.message.contains("start time"));
}

#[test]
fn test_rejects_out_of_hours_start() {
    // 23:00 is past closing
    let err = validate_reservation_request(&[4], 2, 4, Some(at(23, 0)), at(9, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("outside operating hours"));

    // 09:59 is before opening
    let err = validate_reservation_request(&[4], 2, 4, Some(at(9, 59)), at(9, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("outside operating hours"));

    // Exactly at closing is rejected too
    let err = validate_reservation_request(&[4], 2, 4, Some(at(22, 0)), at(9, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("outside operating hours"));
}

#[test]
fn test_open_hours_boundaries() {
    let p = policy();
    assert!(p.is_open_at(at(10, 0)));
    assert!(p.is_open_at(at(21, 59)));
    assert!(!p.is_open_at(at(9, 59)));
    assert!(!p.is_open_at(at(22, 0)));
    assert!(!p.is_open_at(at(23, 0)));
}

#[test]
fn test_quote_window_is_ordered_inside_hours() {
    // Every in-hours start quotes start < end, even right before close
    let quote = quote_window(at(21, 59), &policy());
    assert!(quote.start < quote.end);
    assert_eq!(quote.end, at(22, 0));
}

#[test]
fn test_rejects_past_start() {
    let err = validate_reservation_request(&[4], 2, 4, Some(at(14, 0)), at(15, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("in the past"));
}

#[test]
fn test_rejects_insufficient_capacity() {
    // capacity 2, guests 3
    let err = validate_reservation_request(&[2], 3, 4, Some(at(14, 0)), at(9, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("capacity insufficient"));
}

#[test]
fn test_rejects_undersized_cart() {
    // capacity 4 but only 3 items in the cart
    let err = validate_reservation_request(&[4], 4, 3, Some(at(14, 0)), at(9, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("Cart must contain at least 4"));
}

#[test]
fn test_checks_short_circuit_in_order() {
    // Both capacity and cart would fail; capacity is reported first
    let err = validate_reservation_request(&[2], 3, 0, Some(at(14, 0)), at(9, 0), &policy())
        .unwrap_err();
    assert!(err.message.contains("capacity insufficient"));
}

#[test]
fn test_happy_path_quote() {
    // capacity 4, guests 4, cart 4, start 14:00 → end 16:00, fee 2h × 10
    let quote = validate_reservation_request(&[4], 4, 4, Some(at(14, 0)), at(9, 0), &policy())
        .unwrap();
    assert_eq!(quote.end, at(16, 0));
    assert_eq!(quote.seat_fee, Decimal::from(20));
}

#[test]
fn test_multi_seat_capacity_sums() {
    let quote = validate_reservation_request(&[2, 2], 4, 4, Some(at(14, 0)), at(9, 0), &policy())
        .unwrap();
    assert_eq!(quote.start, at(14, 0));
}

#[test]
fn test_end_capped_at_closing() {
    // start 21:00 → natural end 23:00, capped to 22:00, fee 1h
    let quote = validate_reservation_request(&[4], 4, 4, Some(at(21, 0)), at(9, 0), &policy())
        .unwrap();
    assert_eq!(quote.end, at(22, 0));
    assert_eq!(quote.seat_fee, Decimal::from(10));
}

#[test]
fn test_fractional_hour_fee() {
    // start 21:30 → capped at 22:00 → 0.5h × 10 = 5
    let quote = quote_window(at(21, 30), &policy());
    assert_eq!(quote.end, at(22, 0));
    assert_eq!(quote.seat_fee, Decimal::from(5));
}

#[test]
fn test_local_offset_applied_to_hours_check() {
    // Business runs at UTC+8: 06:00 UTC is 14:00 local, inside hours
    let p = ReservationPolicy {
        utc_offset_minutes: 480,
        ..policy()
    };
    let quote =
        validate_reservation_request(&[4], 4, 4, Some(at(6, 0)), at(1, 0), &p).unwrap();
    assert_eq!(quote.end, at(8, 0));

    // 15:00 UTC is 23:00 local → rejected
    let err =
        validate_reservation_request(&[4], 4, 4, Some(at(15, 0)), at(1, 0), &p).unwrap_err();
    assert!(err.message.contains("outside operating hours"));
}
