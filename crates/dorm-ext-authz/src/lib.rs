//! gRPC access-check server for the dormitory auth service.
//!
//! Implements `auth.AuthProtoService/CheckAccess`: other services ask whether
//! a user may act in a dormitory, optionally with the admin role.

pub mod server;

pub use server::AccessService;

/// Generated protobuf types for `auth`.
#[allow(
    clippy::all,
    clippy::pedantic,
    non_camel_case_types,
    unused_imports,
    missing_docs
)]
pub mod proto {
    tonic::include_proto!("auth");

    /// Encoded descriptor set of `auth.proto`, served through reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("auth_descriptor");
}

/// gRPC server reflection describing `auth.AuthProtoService`.
///
/// # Errors
///
/// Fails if the embedded descriptor set cannot be decoded.
pub fn reflection_service() -> Result<
    tonic_reflection::server::v1::ServerReflectionServer<
        impl tonic_reflection::server::v1::ServerReflection,
    >,
    tonic_reflection::server::Error,
> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1()
}
