pub mod jwt_token_service;
pub mod password_hasher;

pub use jwt_token_service::{JwtTokenService, TokenConfig, TokenKeyConfig};
pub use password_hasher::Argon2PasswordHasher;
