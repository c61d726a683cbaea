//! Business logic services for authentication.

mod auth_service;
mod token_service;

pub use auth_service::{AuthService, AuthSession, RefreshPolicy};
pub use token_service::{
    JwtTokenIssuer, TokenIssuer, TokenPair, ACCESS_TOKEN_VALIDITY_MINUTES,
    REFRESH_TOKEN_VALIDITY_DAYS,
};
