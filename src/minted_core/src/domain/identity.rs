use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by access and refresh tokens. Only the account id travels
/// in the token; everything else is looked up when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: Uuid,
}

impl SessionClaims {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// The authenticated caller of a request, as established by a verified
/// access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestIdentity {
    pub user_id: Uuid,
}

impl From<SessionClaims> for RequestIdentity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.id,
        }
    }
}
