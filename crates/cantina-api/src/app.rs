//! Application builder: wires stores, auth, and the router into a
//! runnable Axum app.

use std::sync::Arc;

use axum::Router;

use cantina_auth::jwt::{JwtDecoder, JwtEncoder};
use cantina_auth::password::{CredentialVerifier, PasswordHasher};
use cantina_auth::policy::RuleSet;
use cantina_auth::session::{SessionManager, SessionStore};
use cantina_core::config::AppConfig;
use cantina_core::error::AppError;
use cantina_store::{CartStore, MemoryUserStore, UserStore};

use crate::router::build_router;
use crate::state::AppState;

/// Wires all shared dependencies from configuration.
///
/// The configuration must already be validated: the signing key reaches
/// the token codec unchecked from here on.
pub fn build_state(config: AppConfig) -> AppState {
    let config = Arc::new(config);

    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let carts = Arc::new(CartStore::new());

    let password_hasher = PasswordHasher::new();
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let credential_verifier = CredentialVerifier::new(Arc::clone(&users), password_hasher.clone());

    let session_store = Arc::new(SessionStore::new(config.session.clone()));
    let session_manager = Arc::new(SessionManager::new(
        session_store,
        Arc::clone(&jwt_decoder),
        Arc::clone(&users),
        credential_verifier.clone(),
    ));

    AppState {
        config,
        users,
        carts,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        credential_verifier,
        session_manager,
        api_rules: Arc::new(RuleSet::api()),
        web_rules: Arc::new(RuleSet::web()),
    }
}

/// Builds the complete Axum application for the given state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Cantina server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Cantina server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Cantina server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
