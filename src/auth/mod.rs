//! Authentication module for the transcription gateway.
//!
//! Single-user login backed by configuration:
//! - Credentials: email + SHA-256 password hash checked by a `CredentialStore`
//! - Sessions: HS256 JWT carried in an HTTP-only cookie

mod cookie;
mod credentials;
mod jwt;
mod key;
mod middleware;

pub use cookie::*;
pub use credentials::*;
pub use jwt::*;
pub use key::*;
pub use middleware::*;
