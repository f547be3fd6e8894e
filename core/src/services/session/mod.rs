//! Session tokens: minting, access checks and revocation
//!
//! Session tokens are HS256 JWTs with a fixed lifetime and no refresh.
//! Revocation writes `bl_<token>` into the TTL cache for the token's
//! remaining lifetime; the access guard consults it before verifying the
//! signature.

mod config;
mod guard;
mod issuer;
mod revoker;
mod token_service;

#[cfg(test)]
mod tests;

pub use config::SessionConfig;
pub use guard::{bearer_token, AccessGuard, Authorizer, Principal};
pub use issuer::SessionIssuer;
pub use revoker::{RevokeResult, SessionRevoker};
pub use token_service::TokenService;
