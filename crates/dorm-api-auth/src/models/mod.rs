//! Request and response DTOs for the authentication endpoints.

mod requests;
mod responses;

pub use requests::{validation_message, LoginRequest, RefreshRequest, RegisterRequest};
pub use responses::{SessionResponse, TokenResponse, UserInfo};
