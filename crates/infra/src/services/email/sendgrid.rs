use super::IEmailService;
use crate::config::SendgridConfig;
use reqwest::Client;
use serde::Serialize;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

pub struct SendgridEmailService {
    client: Client,
    config: SendgridConfig,
}

impl SendgridEmailService {
    pub fn new(config: SendgridConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[async_trait::async_trait]
impl IEmailService for SendgridEmailService {
    async fn send(&self, to: &str, subject: &str, text: &str) -> anyhow::Result<()> {
        let body = MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![Address { email: to }],
            }],
            from: Address {
                email: &self.config.from_email,
            },
            subject,
            content: vec![Content {
                content_type: "text/plain",
                value: text,
            }],
        };
        self.client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
