use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use minted_core::{Password, PasswordHashError, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

/// Argon2id password hasher. The work happens on a blocking thread so the
/// runtime never stalls on a hash.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

fn argon2() -> Result<Argon2<'static>, PasswordHashError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?,
    ))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<Secret<String>, PasswordHashError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::from(h.to_string()))
                    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(
        &self,
        expected_hash: &Secret<String>,
        candidate: &Secret<String>,
    ) -> Result<(), PasswordHashError> {
        let expected_hash = expected_hash.clone();
        let candidate = candidate.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash: PasswordHash<'_> =
                    PasswordHash::new(expected_hash.expose_secret())
                        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?;

                argon2()?
                    .verify_password(candidate.expose_secret().as_bytes(), &expected_hash)
                    .map_err(|e| match e {
                        argon2::password_hash::Error::Password => PasswordHashError::Mismatch,
                        other => PasswordHashError::UnexpectedError(other.to_string()),
                    })
            })
        })
        .await
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
    }
}
