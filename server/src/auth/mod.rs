//! Authentication: JWT service, middleware and extractors

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
