mod inmemory;
mod twilio;

pub use inmemory::{InMemorySmsGateway, SentSms};
pub use twilio::TwilioSmsGateway;

/// Sends text messages to mobile numbers
#[async_trait::async_trait]
pub trait ISmsGateway: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<()>;
}
