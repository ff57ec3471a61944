//! Authentication module
//!
//! Camunda 8 SaaS issues machine-to-machine tokens via the OAuth2 client
//! credentials flow. The `Authenticator` fetches bearer tokens from the
//! login service and caches them until expiry.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, DEFAULT_OAUTH_URL, ZEEBE_AUDIENCE};
pub use types::CachedToken;
