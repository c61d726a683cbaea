//! User storage for the dormitory auth service.
//!
//! The auth core never touches storage directly. It talks to a
//! [`UserRepository`], which takes typed requests and answers with typed
//! responses or a classified [`DbError`].
//!
//! [`InMemoryUserRepository`] is the arena-backed implementation used by the
//! server binary and by tests.

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;

pub use error::DbError;
pub use memory::InMemoryUserRepository;
pub use models::{
    CreateUserRequest, CreateUserResponse, FindUserByEmailRequest, FindUserByIdRequest,
    UserRecord,
};
pub use repository::UserRepository;
