use color_eyre::eyre::Result;
use minted_adapters::{
    AppState, Argon2PasswordHasher, JwtTokenService, PostgresUserStore, PostmarkMailer, Settings,
};
use minted_core::Email;
use minted_service::{IdentityService, get_postgres_pool};
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    // Setup database connection pool and run pending migrations
    let pg_pool = get_postgres_pool(
        settings.database.url.expose_secret(),
        settings.database.max_connections,
    )
    .await?;

    sqlx::migrate!().run(&pg_pool).await?;

    let user_store = PostgresUserStore::new(pg_pool);
    let password_hasher = Argon2PasswordHasher;

    // The refresh cookie lives exactly as long as the token it carries
    let token_config = settings.auth.token_config();
    let refresh_ttl_seconds = token_config.refresh_ttl_seconds();
    let token_service = JwtTokenService::new(token_config);

    let http_client = HttpClient::builder()
        .timeout(Duration::from_millis(settings.mail.timeout_milliseconds))
        .build()?;

    let mailer = PostmarkMailer::new(
        settings.mail.base_url.clone(),
        Email::try_from(Secret::new(settings.mail.sender.clone()))?,
        settings.mail.authorization_token.clone(),
        http_client,
    );

    let state = AppState::new(
        user_store,
        password_hasher,
        token_service,
        mailer,
        settings.app.client_base_url.clone(),
        refresh_ttl_seconds,
    );

    let allowed_origins = (!settings.app.allowed_origins.is_empty())
        .then(|| settings.app.allowed_origins.clone());

    let listener = TcpListener::bind(&settings.app.address).await?;

    IdentityService::new(state)
        .run(listener, allowed_origins)
        .await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
