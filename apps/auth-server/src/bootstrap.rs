//! Startup seeding of the admin account.
//!
//! Registration only ever creates students, so without a seeded admin the
//! admin role gate of `CheckAccess` could never pass.

use dorm_api_auth::{ApiAuthError, AuthService};
use dorm_core::{UserId, UserRole};
use tracing::{error, info, instrument, warn};

use crate::config::BootstrapAdmin;

/// Result of the admin bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created(UserId),
    AlreadyExists,
}

/// Create the configured admin account.
///
/// An existing account with the same e-mail is left untouched.
///
/// # Errors
///
/// Any failure other than a conflict. The server should not start.
#[instrument(
    skip(auth_service, admin),
    fields(email = %admin.email, dormitory_id = %admin.dormitory_id),
    name = "admin_bootstrap"
)]
pub async fn bootstrap_admin(
    auth_service: &AuthService,
    admin: &BootstrapAdmin,
) -> Result<BootstrapOutcome, ApiAuthError> {
    info!("bootstrap.started: Seeding admin account");

    match auth_service
        .register_with_role(
            &admin.email,
            &admin.password,
            &admin.dormitory_id,
            UserRole::Admin,
        )
        .await
    {
        Ok(session) => {
            info!(
                user_id = %session.user_id,
                "bootstrap.completed: Admin account created"
            );
            Ok(BootstrapOutcome::Created(session.user_id))
        }
        Err(ApiAuthError::Conflict(_)) => {
            warn!("bootstrap.completed: Admin e-mail already registered, skipping");
            Ok(BootstrapOutcome::AlreadyExists)
        }
        Err(e) => {
            error!(
                error = %e,
                "bootstrap.failed: Admin bootstrap failed - application cannot start"
            );
            Err(e)
        }
    }
}
