pub mod auth;
pub mod config;
pub mod email;
pub mod http;
pub mod persistence;

// Re-export the pieces a service assembly usually needs
pub use auth::{Argon2PasswordHasher, JwtTokenService, TokenConfig, TokenKeyConfig};
pub use config::Settings;
pub use email::{MockMailer, PostmarkMailer};
pub use http::{ApiError, AppState};
pub use persistence::{InMemoryUserStore, PostgresUserStore};
