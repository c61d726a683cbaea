//! Password hashing and session token library for the dormitory auth service.
//!
//! This crate provides:
//! - Argon2id password hashing with OWASP-recommended parameters
//! - HS256 JWT encoding and decoding with a single shared secret
//! - Access / refresh claims with fixed lifetimes
//!
//! # Example
//!
//! ```rust,ignore
//! use dorm_auth::{encode_token, decode_token, JwtClaims, PasswordHasher, TokenType};
//! use dorm_core::UserId;
//!
//! let claims = JwtClaims::builder(UserId::new(), TokenType::Access)
//!     .dormitory_id("D1")
//!     .ttl(chrono::Duration::minutes(15))
//!     .build();
//!
//! let token = encode_token(&claims, b"secret")?;
//! let decoded = decode_token(&token, b"secret")?;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my-secure-password")?;
//! let is_valid = hasher.verify("my-secure-password", &hash)?;
//! ```

mod claims;
mod error;
mod jwt;
mod password;

// Re-export public API
pub use claims::{JwtClaims, JwtClaimsBuilder, TokenType};
pub use error::AuthError;
pub use jwt::{decode_token, decode_token_of_type, encode_token};
pub use password::PasswordHasher;
