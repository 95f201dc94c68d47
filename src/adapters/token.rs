//! HMAC-signed bearer tokens
//!
//! Implements the `TokenIssuer` port. A token is
//! `base64url(claims-json) "." hex(hmac-sha256(secret, payload))`.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::core::models::{Claims, TodoId};
use crate::core::ports::{TokenError, TokenIssuer};

const BLOCK_SIZE: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Token issuer signing with a shared secret
pub struct SignedTokenIssuer {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl std::fmt::Debug for SignedTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedTokenIssuer")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl SignedTokenIssuer {
    /// Create an issuer; tokens live for `ttl_secs` seconds
    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into().into_bytes(),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Mint a token as if issued at `issued_at` (Unix seconds)
    pub fn issue_at(
        &self,
        login: &str,
        todos: &[TodoId],
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: login.to_string(),
            todos: todos.to_vec(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signature = hex::encode(self.hmac_sha256(payload.as_bytes()));
        Ok(format!("{payload}.{signature}"))
    }

    fn hmac_sha256(&self, data: &[u8]) -> Vec<u8> {
        let key = if self.secret.len() > BLOCK_SIZE {
            Sha256::digest(&self.secret).to_vec()
        } else {
            self.secret.clone()
        };

        let mut key_padded = [0u8; BLOCK_SIZE];
        key_padded[..key.len()].copy_from_slice(&key);

        let ipad_key: Vec<u8> = key_padded.iter().map(|b| b ^ IPAD).collect();
        let opad_key: Vec<u8> = key_padded.iter().map(|b| b ^ OPAD).collect();

        let mut inner = Sha256::new();
        inner.update(&ipad_key);
        inner.update(data);
        let inner_hash = inner.finalize();

        let mut outer = Sha256::new();
        outer.update(&opad_key);
        outer.update(inner_hash);
        outer.finalize().to_vec()
    }
}

impl TokenIssuer for SignedTokenIssuer {
    fn issue(&self, login: &str, todos: &[TodoId]) -> Result<String, TokenError> {
        self.issue_at(login, todos, Utc::now().timestamp())
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| TokenError::Malformed("missing signature".to_string()))?;
        let signature =
            hex::decode(signature).map_err(|e| TokenError::Malformed(e.to_string()))?;

        let expected = self.hmac_sha256(payload.as_bytes());
        let matches = expected.len() == signature.len()
            && expected.iter().zip(&signature).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0;
        if !matches {
            return Err(TokenError::BadSignature);
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;
        let claims: Claims =
            serde_json::from_slice(&bytes).map_err(|e| TokenError::Malformed(e.to_string()))?;

        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired(claims.exp));
        }
        Ok(claims)
    }
}
