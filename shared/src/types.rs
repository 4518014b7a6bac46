//! Domain enums shared between server and clients

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation lifecycle status
///
/// The happy path is strictly linear:
/// `Pending → Confirmed → Preparing → Ready → Completed`.
/// `Canceled` is reachable from `Pending` or `Confirmed` only.
/// `Completed` and `Canceled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Canceled,
}

impl ReservationStatus {
    /// Whether the reservation still blocks its seats as "reserved"
    ///
    /// Canceled reservations never block; Completed ones block as
    /// "occupied" instead (see the availability engine).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Completed | Self::Canceled)
    }

    /// Whether this status is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Check a proposed transition against the linear lifecycle
    ///
    /// No state skipping: `Pending → Completed` is rejected even for
    /// admins.
    pub fn can_transition_to(&self, next: Self) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Preparing)
                | (Preparing, Ready)
                | (Ready, Completed)
                | (Pending, Canceled)
                | (Confirmed, Canceled)
        )
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        };
        f.write_str(s)
    }
}

/// Derived seat display status
///
/// Never stored; recomputed from the seat's reservations and walk-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Reserved,
    Occupied,
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Completed));
    }

    #[test]
    fn test_cancel_only_from_early_states() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Canceled));
        assert!(Confirmed.can_transition_to(Canceled));
        assert!(!Preparing.can_transition_to(Canceled));
        assert!(!Ready.can_transition_to(Canceled));
        assert!(!Completed.can_transition_to(Canceled));
    }

    #[test]
    fn test_no_state_skipping() {
        use ReservationStatus::*;
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Preparing));
        assert!(!Confirmed.can_transition_to(Ready));
    }

    #[test]
    fn test_terminal_states() {
        use ReservationStatus::*;
        assert!(Completed.is_terminal());
        assert!(Canceled.is_terminal());
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Canceled.can_transition_to(Pending));
    }

    #[test]
    fn test_active_flag() {
        use ReservationStatus::*;
        assert!(Pending.is_active());
        assert!(Ready.is_active());
        assert!(!Completed.is_active());
        assert!(!Canceled.is_active());
    }

    #[test]
    fn test_serde_format() {
        let json = serde_json::to_string(&ReservationStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let status: ReservationStatus = serde_json::from_str("\"CANCELED\"").unwrap();
        assert_eq!(status, ReservationStatus::Canceled);
    }
}
