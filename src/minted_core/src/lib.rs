pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    identity::{RequestIdentity, SessionClaims},
    password::{Password, PasswordError},
    pending_registration::PendingRegistration,
    token::{TokenError, TokenKind},
    user::{DEFAULT_AVATAR_URL, Role, SanitizedUser, User},
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{Mailer, PasswordHashError, PasswordHasher},
    tokens::TokenService,
};
