//! Dormitory auth server.
//!
//! Serves the `/auth` HTTP API and the `AuthProtoService` gRPC access check
//! from one process, sharing a single `AuthService`.

mod bootstrap;
mod config;
mod logging;

use std::sync::Arc;

use dorm_api_auth::{auth_router, AuthService, AuthState, JwtTokenIssuer, RefreshPolicy};
use dorm_db::InMemoryUserRepository;
use dorm_ext_authz::proto::auth_proto_service_server::AuthProtoServiceServer;
use dorm_ext_authz::AccessService;
use tokio::signal;
use tokio::sync::watch;
use tonic::transport::Server;
use tracing::{error, info, warn};

use crate::config::Config;

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.log_filter);

    info!(
        http_listen_addr = %config.http_listen_addr,
        grpc_listen_addr = %config.grpc_listen_addr,
        refresh_verify_tokens = config.refresh_verify_tokens,
        max_body_bytes = config.max_body_bytes,
        "Starting auth server"
    );

    let token_issuer = match JwtTokenIssuer::new(config.jwt_secret.as_bytes()) {
        Ok(issuer) => issuer,
        Err(e) => {
            error!(error = %e, "Failed to create token issuer");
            std::process::exit(1);
        }
    };

    let refresh_policy = if config.refresh_verify_tokens {
        RefreshPolicy::VerifyRefreshToken
    } else {
        warn!("Refresh trusts the X-User-ID and X-Dormitory-ID headers; set REFRESH_VERIFY_TOKENS=true to require a valid refresh token");
        RefreshPolicy::TrustHeaders
    };

    let repository = Arc::new(InMemoryUserRepository::new());
    let auth_service = Arc::new(
        AuthService::new(repository, Arc::new(token_issuer)).with_refresh_policy(refresh_policy),
    );

    if let Some(admin) = &config.bootstrap_admin {
        if bootstrap::bootstrap_admin(&auth_service, admin).await.is_err() {
            std::process::exit(1);
        }
    }

    let app = auth_router(
        AuthState::new(auth_service.clone()).with_max_body_bytes(config.max_body_bytes),
    );

    let listener = match tokio::net::TcpListener::bind(config.http_listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(addr = %config.http_listen_addr, error = %e, "Failed to bind HTTP listener");
            std::process::exit(1);
        }
    };

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<AuthProtoServiceServer<AccessService>>()
        .await;

    let reflection_service = match dorm_ext_authz::reflection_service() {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "Failed to build gRPC reflection service");
            std::process::exit(1);
        }
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let http = async {
        info!(addr = %config.http_listen_addr, "HTTP server listening");
        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown_rx.clone()))
            .await
            .map_err(|e| format!("HTTP server error: {e}"))
    };

    let grpc = async {
        info!(addr = %config.grpc_listen_addr, "gRPC server listening");
        Server::builder()
            .add_service(health_service)
            .add_service(reflection_service)
            .add_service(AccessService::new(auth_service.clone()).into_server())
            .serve_with_shutdown(
                config.grpc_listen_addr,
                wait_for_shutdown(shutdown_rx.clone()),
            )
            .await
            .map_err(|e| format!("gRPC server error: {e}"))
    };

    if let Err(e) = tokio::try_join!(http, grpc) {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }

    info!("Auth server stopped");
}

/// Resolves once the shutdown flag is raised.
async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
