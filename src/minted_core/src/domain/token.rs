use thiserror::Error;

/// The three token families issued by the service. Each kind is signed with
/// its own secret and carries its own lifetime, so a token of one kind never
/// verifies as another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Carries a pending registration until the mailed link is clicked.
    Activation,
    /// Short-lived bearer credential for protected endpoints.
    Access,
    /// Long-lived session credential, transported only in the refresh cookie.
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Activation => "activation",
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Unexpected token error: {0}")]
    Unexpected(String),
}
