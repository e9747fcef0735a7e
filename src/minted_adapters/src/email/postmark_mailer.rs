use askama::Template;
use minted_core::{Email, Mailer};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

#[derive(Template)]
#[template(path = "activation_mail.html")]
struct ActivationMailTemplate<'a> {
    link: &'a str,
}

#[derive(Template)]
#[template(path = "reset_mail.html")]
struct ResetMailTemplate<'a> {
    link: &'a str,
}

/// Mailer backed by the Postmark HTTP API.
#[derive(Clone)]
pub struct PostmarkMailer {
    http_client: Client,
    base_url: String,
    sender: Email,
    authorization_token: Secret<String>,
}

impl PostmarkMailer {
    pub fn new(
        base_url: String,
        sender: Email,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }

    async fn send(
        &self,
        recipient: &Email,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), String> {
        let base = Url::parse(&self.base_url).map_err(|e| e.to_string())?;
        let url = base.join("/email").map_err(|e| e.to_string())?;

        let request_body = SendEmailRequest {
            from: self.sender.as_ref().expose_secret(),
            to: recipient.as_ref().expose_secret(),
            subject,
            html_body,
            text_body,
            message_stream: MESSAGE_STREAM,
        };

        let request = self
            .http_client
            .post(url)
            .header(
                POSTMARK_AUTH_HEADER,
                self.authorization_token.expose_secret(),
            )
            .json(&request_body);

        request
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl Mailer for PostmarkMailer {
    #[tracing::instrument(name = "Sending activation mail", skip_all)]
    async fn send_activation_link(&self, recipient: &Email, link: &str) -> Result<(), String> {
        let html_body = ActivationMailTemplate { link }
            .render()
            .map_err(|e| e.to_string())?;
        let text_body = format!("Follow this link to activate your account: {link}");

        self.send(recipient, ACTIVATION_SUBJECT, &html_body, &text_body)
            .await
    }

    #[tracing::instrument(name = "Sending password reset mail", skip_all)]
    async fn send_reset_link(&self, recipient: &Email, link: &str) -> Result<(), String> {
        let html_body = ResetMailTemplate { link }
            .render()
            .map_err(|e| e.to_string())?;
        let text_body = format!("Follow this link to reset your password: {link}");

        self.send(recipient, RESET_SUBJECT, &html_body, &text_body)
            .await
    }
}

const MESSAGE_STREAM: &str = "outbound";
const POSTMARK_AUTH_HEADER: &str = "X-Postmark-Server-Token";
const ACTIVATION_SUBJECT: &str = "Activate your account";
const RESET_SUBJECT: &str = "Reset your password";

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    message_stream: &'a str,
}
