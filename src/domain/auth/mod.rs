pub mod jwt;

pub use jwt::{AdminClaims, JwtManager};
