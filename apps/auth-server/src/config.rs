//! Server configuration loaded from environment variables.

use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_LOG_FILTER: &str = "info,dorm=debug";

const DEFAULT_HTTP_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_GRPC_LISTEN_ADDR: &str = "0.0.0.0:50051";
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Admin account seeded at startup.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
    pub dormitory_id: String,
}

impl fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("dormitory_id", &self.dormitory_id)
            .finish()
    }
}

/// Configuration for the auth server.
#[derive(Clone)]
pub struct Config {
    /// HMAC key used to sign session tokens.
    pub jwt_secret: String,

    /// Listen address for the HTTP API.
    pub http_listen_addr: SocketAddr,

    /// Listen address for the gRPC access-check service.
    pub grpc_listen_addr: SocketAddr,

    /// `EnvFilter` directive for logging.
    pub log_filter: String,

    /// Require a valid refresh token on `/auth/refresh` instead of trusting
    /// the identity headers. Off by default.
    pub refresh_verify_tokens: bool,

    /// Optional admin account created at startup.
    pub bootstrap_admin: Option<BootstrapAdmin>,

    /// Maximum accepted HTTP request body size.
    pub max_body_bytes: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("http_listen_addr", &self.http_listen_addr)
            .field("grpc_listen_addr", &self.grpc_listen_addr)
            .field("log_filter", &self.log_filter)
            .field("refresh_verify_tokens", &self.refresh_verify_tokens)
            .field("bootstrap_admin", &self.bootstrap_admin)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(|key| std::env::var(key))
    }

    /// Load configuration from a custom variable reader.
    ///
    /// This allows tests to supply variables without mutating process-global
    /// environment state.
    pub fn from_reader<F>(reader: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let jwt_secret = reader("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingVar("JWT_SECRET".into()))?;

        let http_listen_addr = parse_addr(&reader, "HTTP_LISTEN_ADDR", DEFAULT_HTTP_LISTEN_ADDR)?;
        let grpc_listen_addr = parse_addr(&reader, "GRPC_LISTEN_ADDR", DEFAULT_GRPC_LISTEN_ADDR)?;

        let log_filter = reader("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let refresh_verify_tokens = reader("REFRESH_VERIFY_TOKENS")
            .unwrap_or_else(|_| "false".to_string())
            .trim()
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidValue("REFRESH_VERIFY_TOKENS".into(), e.to_string()))?;

        let max_body_bytes = match reader("MAX_BODY_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::InvalidValue(
                        "MAX_BODY_BYTES".into(),
                        format!("expected a positive integer, got '{raw}'"),
                    )
                })?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        let bootstrap_admin = bootstrap_admin(&reader)?;

        Ok(Self {
            jwt_secret,
            http_listen_addr,
            grpc_listen_addr,
            log_filter,
            refresh_verify_tokens,
            bootstrap_admin,
            max_body_bytes,
        })
    }
}

fn parse_addr<F>(reader: &F, var: &str, default: &str) -> Result<SocketAddr, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    reader(var)
        .unwrap_or_else(|_| default.to_string())
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidValue(var.into(), e.to_string()))
}

/// All three variables or none.
fn bootstrap_admin<F>(reader: &F) -> Result<Option<BootstrapAdmin>, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    const VARS: [&str; 3] = [
        "BOOTSTRAP_ADMIN_EMAIL",
        "BOOTSTRAP_ADMIN_PASSWORD",
        "BOOTSTRAP_ADMIN_DORMITORY",
    ];

    let values: Vec<Option<String>> = VARS
        .iter()
        .map(|var| reader(var).ok().filter(|v| !v.is_empty()))
        .collect();

    match values.as_slice() {
        [None, None, None] => Ok(None),
        [Some(email), Some(password), Some(dormitory_id)] => Ok(Some(BootstrapAdmin {
            email: email.clone(),
            password: password.clone(),
            dormitory_id: dormitory_id.clone(),
        })),
        _ => {
            let missing = VARS
                .iter()
                .zip(&values)
                .find(|(_, value)| value.is_none())
                .map_or(VARS[0], |(var, _)| *var);
            Err(ConfigError::InvalidValue(
                missing.into(),
                "BOOTSTRAP_ADMIN_EMAIL, BOOTSTRAP_ADMIN_PASSWORD and BOOTSTRAP_ADMIN_DORMITORY must be set together".into(),
            ))
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}
