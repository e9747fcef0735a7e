use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use crate::auth::{TokenConfig, TokenKeyConfig};
use crate::config::constants::{
    ACCESS_TOKEN_TTL_SECONDS, ACTIVATION_TOKEN_TTL_SECONDS, DEFAULT_APP_ADDRESS,
    REFRESH_TOKEN_TTL_SECONDS,
};

/// Service configuration, loaded from the environment with the `MINTED`
/// prefix and `__` as the nesting separator, e.g.
/// `MINTED__AUTH__ACCESS_SECRET`. The three signing secrets, the database
/// url and the Postmark token have no defaults and must be provided.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub auth: AuthSettings,
    pub database: DatabaseSettings,
    pub mail: MailSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
    /// Base URL of the frontend that activation and reset links point at.
    pub client_base_url: String,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub activation_secret: Secret<String>,
    pub access_secret: Secret<String>,
    pub refresh_secret: Secret<String>,
    pub activation_ttl_seconds: i64,
    pub access_ttl_seconds: i64,
    pub refresh_ttl_seconds: i64,
}

impl AuthSettings {
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig {
            activation: TokenKeyConfig {
                secret: self.activation_secret.clone(),
                ttl_seconds: self.activation_ttl_seconds,
            },
            access: TokenKeyConfig {
                secret: self.access_secret.clone(),
                ttl_seconds: self.access_ttl_seconds,
            },
            refresh: TokenKeyConfig {
                secret: self.refresh_secret.clone(),
                ttl_seconds: self.refresh_ttl_seconds,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailSettings {
    pub base_url: String,
    pub sender: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("app.address", DEFAULT_APP_ADDRESS)?
            .set_default("app.client_base_url", "http://localhost:3000")?
            .set_default("app.allowed_origins", Vec::<String>::new())?
            .set_default("auth.activation_ttl_seconds", ACTIVATION_TOKEN_TTL_SECONDS)?
            .set_default("auth.access_ttl_seconds", ACCESS_TOKEN_TTL_SECONDS)?
            .set_default("auth.refresh_ttl_seconds", REFRESH_TOKEN_TTL_SECONDS)?
            .set_default("database.max_connections", 5)?
            .set_default("mail.base_url", "https://api.postmarkapp.com")?
            .set_default("mail.sender", "hello@minted.dev")?
            .set_default("mail.timeout_milliseconds", 10_000)?
            .add_source(
                Environment::with_prefix("MINTED")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("app.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
