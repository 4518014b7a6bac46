use crate::auth::JwtConfig;
use crate::availability::ReservationPolicy;
use chrono::{Duration, NaiveTime};
use rust_decimal::Decimal;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/latte | Work directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | REQUEST_TIMEOUT_MS | 30000 | Persistence timeout per request (ms) |
/// | OPEN_TIME | 10:00 | Business-local opening time |
/// | CLOSE_TIME | 22:00 | Business-local closing time |
/// | RESERVATION_MINUTES | 120 | Default reservation duration |
/// | SEAT_HOURLY_RATE | 10 | Seat fee per hour |
/// | UTC_OFFSET_MINUTES | 0 | Business timezone offset from UTC |
/// | ADMIN_USERNAME | admin | Seeded admin account |
/// | ADMIN_PASSWORD | admin | Seeded admin password |
/// | NOTIFY_WEBHOOK_URL | (unset) | Reservation notification webhook |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/latte HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Running environment: development | staging | production
    pub environment: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Persistence timeout per request (milliseconds)
    pub request_timeout_ms: u64,

    // === Reservation policy ===
    /// Business-local opening time
    pub open_time: NaiveTime,
    /// Business-local closing time
    pub close_time: NaiveTime,
    /// Default reservation duration in minutes
    pub reservation_minutes: i64,
    /// Seat fee per hour
    pub seat_hourly_rate: Decimal,
    /// Business timezone offset from UTC, in minutes
    pub utc_offset_minutes: i32,

    // === Bootstrap ===
    /// Seeded admin username
    pub admin_username: String,
    /// Seeded admin password
    pub admin_password: String,

    /// Reservation notification webhook, disabled when unset
    pub notify_webhook_url: Option<String>,
}

fn parse_time(var: &str, default: NaiveTime) -> NaiveTime {
    std::env::var(var)
        .ok()
        .and_then(|v| NaiveTime::parse_from_str(&v, "%H:%M").ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/latte".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),

            open_time: parse_time("OPEN_TIME", NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            close_time: parse_time("CLOSE_TIME", NaiveTime::from_hms_opt(22, 0, 0).unwrap()),
            reservation_minutes: std::env::var("RESERVATION_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(120),
            seat_hourly_rate: std::env::var("SEAT_HOURLY_RATE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| Decimal::from(10)),
            utc_offset_minutes: std::env::var("UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(0),

            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".into()),

            notify_webhook_url: std::env::var("NOTIFY_WEBHOOK_URL").ok(),
        }
    }

    /// Override work dir and port, used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// The availability policy derived from this configuration
    pub fn policy(&self) -> ReservationPolicy {
        ReservationPolicy {
            open: self.open_time,
            close: self.close_time,
            duration: Duration::minutes(self.reservation_minutes),
            hourly_rate: self.seat_hourly_rate,
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
