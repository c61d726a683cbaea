//! Liveness endpoint.
//!
//! GET /auth/ping - Returns "pong".

pub async fn ping_handler() -> &'static str {
    "pong"
}
