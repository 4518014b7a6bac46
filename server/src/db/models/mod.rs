//! Database Models

pub mod cart;
pub mod product;
pub mod reservation;
pub mod seat;
pub mod serde_helpers;
pub mod user;
pub mod walk_in;

pub use cart::{CartItem, CartItemCreate};
pub use product::{Product, ProductCreate, ProductUpdate, SizeVariant};
pub use reservation::{LineItem, Reservation};
pub use seat::{Seat, SeatCreate, SeatUpdate};
pub use user::{User, UserCreate};
pub use walk_in::{WalkIn, WalkInCreate};
