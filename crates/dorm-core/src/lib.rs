//! Dormitory auth core library
//!
//! Shared types for the dormitory auth service.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (UserId)
//! - [`role`] - Subject roles (student, admin)
//!
//! # Example
//!
//! ```
//! use dorm_core::{UserId, UserRole};
//!
//! let user_id = UserId::new();
//! let role: UserRole = "admin".parse().unwrap();
//! assert!(role.is_admin());
//! # let _ = user_id;
//! ```

pub mod ids;
pub mod role;

pub use ids::{ParseIdError, UserId};
pub use role::{ParseRoleError, UserRole};
