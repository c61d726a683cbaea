//! Authentication API for the dormitory service.
//!
//! This crate provides:
//! - `AuthService`: registration, login, token refresh and user lookup
//! - `TokenIssuer` / `JwtTokenIssuer`: access and refresh token minting
//! - REST endpoints under `/auth` (ping, register, login, refresh)
//!
//! # Example
//!
//! ```rust,ignore
//! use dorm_api_auth::{auth_router, AuthService, AuthState, JwtTokenIssuer};
//! use dorm_db::InMemoryUserRepository;
//! use std::sync::Arc;
//!
//! let issuer = Arc::new(JwtTokenIssuer::new(secret)?);
//! let service = AuthService::new(Arc::new(InMemoryUserRepository::new()), issuer);
//! let app = auth_router(AuthState::new(Arc::new(service)));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::{ApiAuthError, ErrorResponse};
pub use models::{
    LoginRequest, RefreshRequest, RegisterRequest, SessionResponse, TokenResponse, UserInfo,
};
pub use router::{auth_router, AuthState, DEFAULT_MAX_BODY_BYTES};
pub use services::{
    AuthService, AuthSession, JwtTokenIssuer, RefreshPolicy, TokenIssuer, TokenPair,
    ACCESS_TOKEN_VALIDITY_MINUTES, REFRESH_TOKEN_VALIDITY_DAYS,
};
