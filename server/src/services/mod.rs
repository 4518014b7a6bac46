//! Background services

pub mod notifier;

pub use notifier::{Notifier, ReservationEvent};
