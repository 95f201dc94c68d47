//! Token issuer port
//!
//! Defines the interface for minting and checking bearer tokens.

use thiserror::Error;

use super::super::models::{Claims, TodoId};

/// Errors raised while issuing or verifying a token
#[derive(Debug, Error)]
pub enum TokenError {
    /// Claims could not be serialized
    #[error("failed to encode token claims: {0}")]
    Encode(#[from] serde_json::Error),

    /// Token is not in the expected `payload.signature` shape
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Signature does not match the payload
    #[error("token signature mismatch")]
    BadSignature,

    /// Token is past its expiry
    #[error("token expired at {0}")]
    Expired(i64),
}

/// Issues bearer tokens binding a login to its todo set
pub trait TokenIssuer: Send + Sync {
    /// Mint a token for `login` carrying `todos` as its resource claim
    fn issue(&self, login: &str, todos: &[TodoId]) -> Result<String, TokenError>;

    /// Check a token and return its claims
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}
