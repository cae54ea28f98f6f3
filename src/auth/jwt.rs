//! Session tokens: HS256 JWTs asserting the logged-in identity.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::SigningKey;
use crate::error::{GateError, GateResult};

/// Lifetime of an issued token.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated identity.
    pub email: String,
    /// Issued at time (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// The principal recovered from a valid token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Identity {
    pub email: String,
}

/// Issues and validates session tokens.
///
/// Holds no per-token state; validity is signature plus expiry only, so a
/// token cannot be revoked before it expires.
#[derive(Clone)]
pub struct TokenService {
    key: Option<SigningKey>,
}

impl TokenService {
    /// Create a token service. Without a key nothing is issued and nothing verifies.
    pub fn new(key: Option<SigningKey>) -> Self {
        Self { key }
    }

    pub fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    /// Token lifetime in seconds, matching the cookie max-age.
    pub fn token_ttl_seconds(&self) -> i64 {
        Duration::days(TOKEN_TTL_DAYS).num_seconds()
    }

    /// Generate a token for an already verified identity.
    pub fn generate_token(&self, email: &str) -> GateResult<String> {
        self.generate_token_at(email, Utc::now())
    }

    fn generate_token_at(&self, email: &str, now: DateTime<Utc>) -> GateResult<String> {
        let key = self
            .key
            .as_ref()
            .ok_or_else(|| GateError::Config("token signing secret is not set".to_string()))?;

        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, key.encoding())
            .map_err(|e| GateError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Validate a token and recover its identity.
    ///
    /// Malformed, tampered, expired and foreign-algorithm tokens all come
    /// back as `None`.
    pub fn verify_token(&self, token: &str) -> Option<Identity> {
        let key = self.key.as_ref()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data: TokenData<Claims> = decode(token, key.decoding(), &validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "JWT validation failed");
            })
            .ok()?;

        // jsonwebtoken still accepts exp == now
        if token_data.claims.exp <= Utc::now().timestamp() {
            tracing::debug!(exp = token_data.claims.exp, "JWT expired");
            return None;
        }

        Some(Identity {
            email: token_data.claims.email,
        })
    }
}
