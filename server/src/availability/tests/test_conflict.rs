use super::*;

// ========================================================================
// has_conflict 半开区间重叠
// ========================================================================

#[test]
fn test_touching_windows_do_not_conflict() {
    // [10:00,12:00) vs [12:00,14:00) — touching endpoints allowed
    let existing = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Confirmed)];
    assert!(!has_conflict(at(10, 0), at(12, 0), &existing, None));
}

#[test]
fn test_one_minute_overlap_conflicts() {
    // [11:59,12:01) vs [12:00,14:00)
    let existing = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Confirmed)];
    assert!(has_conflict(at(11, 59), at(12, 1), &existing, None));
}

#[test]
fn test_contained_window_conflicts() {
    let existing = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Pending)];
    assert!(has_conflict(at(12, 30), at(13, 30), &existing, None));
    assert!(has_conflict(at(11, 0), at(15, 0), &existing, None));
}

#[test]
fn test_canceled_interval_ignored() {
    let existing = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Canceled)];
    assert!(!has_conflict(at(12, 0), at(14, 0), &existing, None));
}

#[test]
fn test_completed_interval_still_conflicts() {
    let existing = vec![interval("r1", (12, 0), (14, 0), ReservationStatus::Completed)];
    assert!(has_conflict(at(13, 0), at(15, 0), &existing, None));
}

#[test]
fn test_exclude_interval_under_edit() {
    // Extending r1's own end time must not conflict with r1 itself
    let existing = vec![
        interval("r1", (12, 0), (14, 0), ReservationStatus::Confirmed),
        interval("r2", (16, 0), (18, 0), ReservationStatus::Confirmed),
    ];
    assert!(!has_conflict(at(12, 0), at(15, 0), &existing, Some("r1")));
    assert!(has_conflict(at(12, 0), at(17, 0), &existing, Some("r1")));
}

#[test]
fn test_missing_endpoints_never_conflict() {
    let existing = vec![ReservationInterval {
        id: Some("r1".into()),
        start: None,
        end: Some(at(14, 0)),
        status: ReservationStatus::Confirmed,
    }];
    assert!(!has_conflict(at(10, 0), at(22, 0), &existing, None));
}

#[test]
fn test_overlap_predicate_is_symmetric() {
    let cases = [
        ((10, 0), (12, 0), (11, 0), (13, 0), true),
        ((10, 0), (12, 0), (12, 0), (14, 0), false),
        ((10, 0), (11, 0), (13, 0), (14, 0), false),
    ];
    for (a_s, a_e, b_s, b_e, expected) in cases {
        let (a_s, a_e) = (at(a_s.0, a_s.1), at(a_e.0, a_e.1));
        let (b_s, b_e) = (at(b_s.0, b_s.1), at(b_e.0, b_e.1));
        assert_eq!(overlaps(a_s, a_e, b_s, b_e), expected);
        assert_eq!(overlaps(b_s, b_e, a_s, a_e), expected);
    }
}
