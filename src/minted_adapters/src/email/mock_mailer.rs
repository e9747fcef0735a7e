use minted_core::{Email, Mailer};

#[derive(Debug, Clone, Default)]
pub struct MockMailer;

impl MockMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Mailer for MockMailer {
    async fn send_activation_link(&self, _recipient: &Email, _link: &str) -> Result<(), String> {
        Ok(())
    }

    async fn send_reset_link(&self, _recipient: &Email, _link: &str) -> Result<(), String> {
        Ok(())
    }
}
