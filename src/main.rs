//! Transcribe Gate - authentication gateway for the audio transcription app
//!
//! A single configured user logs in with email and password and receives a
//! signed, seven-day session token in an HTTP-only cookie. Every protected
//! request is gated on that token.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod auth;
mod config;
mod error;
mod logging;

use crate::api::build_router;
use crate::auth::{hash_password, CredentialStore, SigningKey, StaticCredentialStore, TokenService};
use crate::config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Verifies submitted login credentials.
    pub credentials: Arc<dyn CredentialStore>,
    /// Issues and validates session tokens.
    pub tokens: TokenService,
    /// Mark session cookies `Secure`.
    pub secure_cookie: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `transcribe-gate hash-password <password>` prints the value for AUTH_PASSWORD_HASH
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [command, password] = args.as_slice() {
        if command == "hash-password" {
            println!("{}", hash_password(password));
            return Ok(());
        }
    }

    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        // Missing .env is expected in production
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Configuration first: it selects the log format
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    logging::init(&config.logging);

    tracing::info!("Starting Transcribe Gate v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        log_format = ?config.logging.format,
        auth = ?config.auth,
        "Configuration loaded"
    );

    // Build authentication components
    let credentials = StaticCredentialStore::new(
        config.auth.username.clone(),
        config.auth.password_hash.clone(),
    );
    let tokens = TokenService::new(SigningKey::from_secret(&config.auth.jwt_secret));

    if !credentials.is_configured() {
        tracing::warn!("AUTH_USERNAME or AUTH_PASSWORD_HASH not set - all logins will be rejected");
    }
    if !tokens.is_configured() {
        tracing::warn!("JWT_SECRET not set - no session token will be issued or accepted");
    }

    let state = AppState {
        credentials: Arc::new(credentials),
        tokens,
        secure_cookie: config.auth.secure_cookie,
    };

    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
