use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use fake::{Fake, faker::internet::en::SafeEmail};
use minted_adapters::{
    AppState, Argon2PasswordHasher, InMemoryUserStore, JwtTokenService,
    auth::{TokenConfig, TokenKeyConfig},
};
use minted_core::{Email, Mailer, Role, UserStore};
use minted_service::IdentityService;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tokio::net::TcpListener;
use uuid::Uuid;

/// A running service instance on a random port, with handles into its
/// in-memory store and recording mailer so tests can look behind the API.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: InMemoryUserStore,
    pub mailer: RecordingMailer,
    pub token_service: JwtTokenService,
}

#[derive(Clone, Debug)]
pub struct SentMail {
    pub recipient: String,
    pub link: String,
}

/// Mailer double that records every link instead of sending anything.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub mailbox: Arc<Mutex<Vec<SentMail>>>,
}

impl RecordingMailer {
    fn record(&self, recipient: &Email, link: &str) {
        self.mailbox.lock().unwrap().push(SentMail {
            recipient: recipient.as_ref().expose_secret().clone(),
            link: link.to_string(),
        });
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_activation_link(&self, recipient: &Email, link: &str) -> Result<(), String> {
        self.record(recipient, link);
        Ok(())
    }

    async fn send_reset_link(&self, recipient: &Email, link: &str) -> Result<(), String> {
        self.record(recipient, link);
        Ok(())
    }
}

pub fn token_config() -> TokenConfig {
    TokenConfig {
        activation: TokenKeyConfig {
            secret: Secret::from("activation-test-secret".to_string()),
            ttl_seconds: 300,
        },
        access: TokenKeyConfig {
            secret: Secret::from("access-test-secret".to_string()),
            ttl_seconds: 900,
        },
        refresh: TokenKeyConfig {
            secret: Secret::from("refresh-test-secret".to_string()),
            ttl_seconds: 604_800,
        },
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = InMemoryUserStore::default();
        let mailer = RecordingMailer::default();
        let config = token_config();
        let refresh_ttl_seconds = config.refresh_ttl_seconds();
        let token_service = JwtTokenService::new(config);

        let state = AppState::new(
            user_store.clone(),
            Argon2PasswordHasher,
            token_service.clone(),
            mailer.clone(),
            "http://localhost:3000".to_string(),
            refresh_ttl_seconds,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to a random port");
        let address = format!("http://{}", listener.local_addr().expect("No local address"));

        let router = IdentityService::new(state).into_router(None);
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server stopped");
        });

        let http_client = reqwest::Client::new();

        Self {
            address,
            http_client,
            user_store,
            mailer,
            token_service,
        }
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register(&self, body: &Value) -> reqwest::Response {
        self.post_json("/register", body).await
    }

    pub async fn post_activation(&self, body: &Value) -> reqwest::Response {
        self.post_json("/activation", body).await
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.post_json("/login", body).await
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}/logout", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_refresh_token(&self, refresh_token: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/refresh_token", self.address));

        if let Some(refresh_token) = refresh_token {
            request = request.header(
                reqwest::header::COOKIE,
                format!("refreshtoken={refresh_token}"),
            );
        }

        request.send().await.expect("Failed to execute request")
    }

    pub async fn post_forgot(&self, body: &Value) -> reqwest::Response {
        self.post_json("/forgot", body).await
    }

    pub async fn post_reset(&self, access_token: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/reset", self.address))
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_info(&self, access_token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/info", self.address))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_all(&self, access_token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/all", self.address))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_update(&self, access_token: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .patch(format!("{}/update", self.address))
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_update_role(
        &self,
        access_token: &str,
        id: Uuid,
        body: &Value,
    ) -> reqwest::Response {
        self.http_client
            .patch(format!("{}/update_role/{}", self.address, id))
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Wait until the mailbox holds at least `count` mails and return the
    /// most recent one. Mail dispatch is fire-and-forget, so the mail can
    /// land shortly after the response.
    pub async fn wait_for_mail(&self, count: usize) -> SentMail {
        for _ in 0..100 {
            {
                let mailbox = self.mailer.mailbox.lock().unwrap();
                if mailbox.len() >= count {
                    return mailbox.last().expect("Mailbox is empty").clone();
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("Expected {count} mails, none arrived in time");
    }

    /// Register and return the activation token carried by the mailed link.
    pub async fn register_and_extract_activation_token(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> String {
        let mails_before = self.mailer.mailbox.lock().unwrap().len();

        let response = self
            .post_register(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let mail = self.wait_for_mail(mails_before + 1).await;
        token_from_link(&mail.link)
    }

    /// Run the whole register plus activation flow.
    pub async fn create_account(&self, name: &str, email: &str, password: &str) {
        let activation_token = self
            .register_and_extract_activation_token(name, email, password)
            .await;

        let response = self
            .post_activation(&serde_json::json!({ "activation_token": activation_token }))
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }

    /// Log in and return the refresh token from the Set-Cookie header.
    pub async fn login_refresh_token(&self, email: &str, password: &str) -> String {
        let response = self
            .post_login(&serde_json::json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        refresh_cookie_value(&response).expect("Login did not set the refresh cookie")
    }

    /// Full path from credentials to a bearer access token.
    pub async fn access_token(&self, email: &str, password: &str) -> String {
        let refresh_token = self.login_refresh_token(email, password).await;

        let response = self.post_refresh_token(Some(&refresh_token)).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.expect("Body was not valid JSON");
        body["access_token"]
            .as_str()
            .expect("No access token in body")
            .to_string()
    }

    /// Flip an account to admin directly in the store.
    pub async fn promote_to_admin(&self, email: &str) {
        let email = Email::try_from(Secret::from(email.to_string())).expect("Invalid email");
        let user = self
            .user_store
            .find_by_email(&email)
            .await
            .expect("Account not found");

        self.user_store
            .update_role(user.id(), Role::Admin)
            .await
            .expect("Failed to update role");
    }

    pub async fn user_id(&self, email: &str) -> Uuid {
        let email = Email::try_from(Secret::from(email.to_string())).expect("Invalid email");
        self.user_store
            .find_by_email(&email)
            .await
            .expect("Account not found")
            .id()
    }
}

pub fn random_email() -> String {
    SafeEmail().fake()
}

pub fn token_from_link(link: &str) -> String {
    link.rsplit('/')
        .next()
        .expect("Link has no token segment")
        .to_string()
}

/// Pull the refresh token out of the Set-Cookie header. The cookie is
/// marked Secure, so reqwest's cookie store would refuse it over plain
/// http; the tests read it straight off the response instead.
pub fn refresh_cookie_value(response: &reqwest::Response) -> Option<String> {
    let header = response
        .headers()
        .get(reqwest::header::SET_COOKIE)?
        .to_str()
        .ok()?;
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;

    (name == "refreshtoken").then(|| value.to_string())
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Body was not valid JSON");
    body["error"]
        .as_str()
        .expect("No error field in body")
        .to_string()
}

pub async fn success_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Body was not valid JSON");
    body["msg"]
        .as_str()
        .expect("No msg field in body")
        .to_string()
}
