//! Reservation writing: locking, conflict re-checks and lifecycle

pub mod locks;
pub mod writer;

pub use locks::SeatLocks;
pub use writer::{CreateReservation, CreateWalkIn, ReservationWriter};

#[cfg(test)]
mod tests;
