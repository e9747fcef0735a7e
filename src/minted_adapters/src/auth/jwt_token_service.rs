use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind};
use minted_core::{TokenError, TokenKind, TokenService};
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, de::DeserializeOwned};

/// Signing secret and lifetime for one token kind.
#[derive(Clone)]
pub struct TokenKeyConfig {
    pub secret: Secret<String>,
    pub ttl_seconds: i64,
}

impl TokenKeyConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Signing configuration for all three token kinds. The secrets must differ
/// between kinds, otherwise the kind separation collapses.
#[derive(Clone)]
pub struct TokenConfig {
    pub activation: TokenKeyConfig,
    pub access: TokenKeyConfig,
    pub refresh: TokenKeyConfig,
}

impl TokenConfig {
    fn for_kind(&self, kind: TokenKind) -> &TokenKeyConfig {
        match kind {
            TokenKind::Activation => &self.activation,
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh.ttl_seconds
    }
}

/// Wraps caller claims with the registered timestamp claims before signing.
#[derive(Serialize)]
struct TimedClaims<'a, C: Serialize> {
    #[serde(flatten)]
    claims: &'a C,
    iat: i64,
    exp: i64,
}

/// HMAC-signed JWTs, one secret per token kind.
#[derive(Clone)]
pub struct JwtTokenService {
    config: TokenConfig,
}

impl JwtTokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }
}

impl TokenService for JwtTokenService {
    fn issue<C: Serialize>(&self, kind: TokenKind, claims: &C) -> Result<String, TokenError> {
        let key = self.config.for_kind(kind);

        let delta = chrono::Duration::try_seconds(key.ttl_seconds)
            .ok_or_else(|| TokenError::Unexpected("Failed to create token duration".to_string()))?;
        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or_else(|| TokenError::Unexpected("Duration out of range".to_string()))?
            .timestamp();

        let timed = TimedClaims {
            claims,
            iat: now.timestamp(),
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &timed,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .map_err(|e| TokenError::Unexpected(e.to_string()))
    }

    fn verify<C: DeserializeOwned>(
        &self,
        kind: TokenKind,
        token: &str,
    ) -> Result<C, TokenError> {
        let key = self.config.for_kind(kind);

        // No leeway: a token is expired the moment its exp passes
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<C>(
            token,
            &DecodingKey::from_secret(key.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }
}
