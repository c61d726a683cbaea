//! `AuthProtoService` implementation.
//!
//! Each call reads the subject through [`AuthService::user_info`] and runs
//! the access policy over the result. Lookup failures become denials, so
//! `CheckAccess` never returns a gRPC error status.

use std::sync::Arc;

use dorm_api_auth::{ApiAuthError, AuthService};
use dorm_authorization::{evaluate, AccessDecision, AccessRequest, LookupFailure, SubjectInfo};
use dorm_core::UserId;
use tonic::{Request, Response, Status};

use crate::proto::auth_proto_service_server::{AuthProtoService, AuthProtoServiceServer};
use crate::proto::{CheckAccessRequest, CheckAccessResponse};

/// gRPC access-check service.
#[derive(Clone)]
pub struct AccessService {
    auth_service: Arc<AuthService>,
}

impl AccessService {
    #[must_use]
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// Wrap in the generated tonic server.
    #[must_use]
    pub fn into_server(self) -> AuthProtoServiceServer<Self> {
        AuthProtoServiceServer::new(self)
    }

    /// Look up the subject and evaluate the policy.
    pub async fn decide(&self, request: &AccessRequest) -> AccessDecision {
        let lookup = self.lookup(&request.user_id).await;
        evaluate(lookup.as_ref(), request)
    }

    async fn lookup(&self, user_id: &str) -> Result<SubjectInfo, LookupFailure> {
        let user_id = user_id
            .parse::<UserId>()
            .map_err(|e| LookupFailure::Failed(format!("invalid user id: {e}")))?;

        match self.auth_service.user_info(user_id).await {
            Ok(info) => Ok(SubjectInfo {
                user_id: info.user_id,
                dormitory_id: info.dormitory_id,
                role: info.role,
            }),
            Err(ApiAuthError::NotFound(_)) => Err(LookupFailure::NotFound),
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Subject lookup failed");
                Err(LookupFailure::Failed(e.to_string()))
            }
        }
    }
}

#[tonic::async_trait]
impl AuthProtoService for AccessService {
    async fn check_access(
        &self,
        request: Request<CheckAccessRequest>,
    ) -> Result<Response<CheckAccessResponse>, Status> {
        let req = request.into_inner();

        tracing::debug!(
            user_id = %req.user_id,
            dormitory_id = %req.dormitory_id,
            role_required = req.role_required,
            "CheckAccess called"
        );

        let access = AccessRequest::new(req.user_id, req.dormitory_id, req.role_required);
        let decision = self.decide(&access).await;

        if decision.allowed {
            tracing::debug!(
                user_id = %access.user_id,
                dormitory_id = %access.dormitory_id,
                role = %decision.subject_role,
                "Access allowed"
            );
        } else {
            tracing::info!(
                user_id = %access.user_id,
                dormitory_id = %access.dormitory_id,
                reason = %decision.reason,
                source = ?decision.source,
                "Access denied"
            );
        }

        Ok(Response::new(CheckAccessResponse {
            allowed: decision.allowed,
            reason: decision.reason,
            user_role: decision.subject_role,
        }))
    }
}
