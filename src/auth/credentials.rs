//! Credential verification for the single configured user.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Checks a submitted email/password pair.
///
/// Callers reject empty fields before asking; implementations never fail,
/// they only answer yes or no.
pub trait CredentialStore: Send + Sync {
    fn verify_credentials(&self, email: &str, password: &str) -> bool;
}

/// Hash a password as lowercase hex SHA-256.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Credential store backed by one configured identity and password hash.
#[derive(Clone)]
pub struct StaticCredentialStore {
    username: String,
    password_hash: String,
}

impl StaticCredentialStore {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Whether both the identity and the hash are set.
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password_hash.is_empty()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn verify_credentials(&self, email: &str, password: &str) -> bool {
        let digest = hash_password(password);

        // No short-circuit: both comparisons always run.
        let email_ok = ct_eq(email.as_bytes(), self.username.as_bytes());
        let hash_ok = ct_eq(digest.as_bytes(), self.password_hash.as_bytes());

        email_ok & hash_ok
    }
}

/// Constant-time comparison of two byte slices.
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.ct_eq(b).into()
}
