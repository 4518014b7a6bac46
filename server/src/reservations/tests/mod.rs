//! Reservation writer tests on the in-memory engine

mod test_writer;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rust_decimal::Decimal;
use surrealdb::RecordId;

use crate::auth::JwtConfig;
use crate::core::{Config, ServerState};
use crate::db::DbService;
use crate::db::models::{CartItemCreate, ProductCreate, Seat, SeatCreate};
use crate::reservations::ReservationWriter;

// ==================== helpers ====================

fn test_config() -> Config {
    Config {
        work_dir: ".".to_string(),
        http_port: 0,
        environment: "test".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-key-with-enough-length!!".to_string(),
            expiration_minutes: 60,
            issuer: "latte-server".to_string(),
            audience: "latte-clients".to_string(),
        },
        request_timeout_ms: 5000,
        open_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        close_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        reservation_minutes: 120,
        seat_hourly_rate: Decimal::from(10),
        utc_offset_minutes: 0,
        admin_username: "admin".to_string(),
        admin_password: "admin".to_string(),
        notify_webhook_url: None,
    }
}

async fn setup() -> (ServerState, ReservationWriter) {
    let db = DbService::memory().await.expect("memory db");
    let state = ServerState::with_db(test_config(), db);
    let writer = ReservationWriter::from_state(&state);
    (state, writer)
}

/// Tomorrow at the given hour UTC: always in the future, always within
/// the 10:00-22:00 test operating window when 10 <= hour < 22
fn tomorrow_at(hour: u32) -> DateTime<Utc> {
    (Utc::now() + Duration::days(1))
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
}

fn customer(name: &str) -> RecordId {
    RecordId::from_table_key("user", name)
}

async fn seed_seat(state: &ServerState, name: &str, capacity: i32) -> Seat {
    state
        .db
        .seats()
        .create(SeatCreate {
            name: name.to_string(),
            capacity: Some(capacity),
            description: None,
            image_url: None,
        })
        .await
        .expect("seed seat")
}

/// Seed a product and put `quantity` of it in the customer's cart
async fn fill_cart(state: &ServerState, owner: &RecordId, quantity: i32) {
    let product = state
        .db
        .products()
        .create(ProductCreate {
            name: format!("latte-{}", owner.key()),
            price: Decimal::new(45, 1), // 4.5
            description: None,
            image_url: None,
            sizes: vec![],
        })
        .await
        .expect("seed product");

    state
        .db
        .cart()
        .add(
            owner,
            CartItemCreate {
                product: product.id.expect("product id"),
                quantity,
                size: None,
            },
        )
        .await
        .expect("fill cart");
}

fn seat_id(seat: &Seat) -> String {
    seat.id.as_ref().expect("seat id").to_string()
}
