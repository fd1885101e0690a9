use super::ISmsGateway;
use crate::config::TwilioConfig;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

// https://www.twilio.com/docs/sms/api/message-resource#create-a-message-resource
const TWILIO_API_URL: &str = "https://api.twilio.com/2010-04-01";

pub struct TwilioSmsGateway {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsGateway {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_URL, self.config.account_sid
        )
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
    status: String,
}

#[async_trait::async_trait]
impl ISmsGateway for TwilioSmsGateway {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<()> {
        let params = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", body),
        ];
        let res = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<MessageResponse>()
            .await?;

        info!("Text message {} is {}", res.sid, res.status);
        Ok(())
    }
}
