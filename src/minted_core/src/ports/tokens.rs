use serde::{Serialize, de::DeserializeOwned};

use crate::domain::token::{TokenError, TokenKind};

/// Signing and verification of the service's tokens.
///
/// Verification classifies failures: an expired-but-otherwise-sound token is
/// `TokenError::Expired`, everything else that fails to verify is
/// `TokenError::Invalid`. Callers rely on the distinction for their error
/// mapping.
pub trait TokenService: Send + Sync {
    fn issue<C: Serialize>(&self, kind: TokenKind, claims: &C) -> Result<String, TokenError>;
    fn verify<C: DeserializeOwned>(&self, kind: TokenKind, token: &str)
    -> Result<C, TokenError>;
}
