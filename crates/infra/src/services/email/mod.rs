mod inmemory;
mod sendgrid;

pub use inmemory::{InMemoryEmailService, SentEmail};
pub use sendgrid::SendgridEmailService;

#[async_trait::async_trait]
pub trait IEmailService: Send + Sync {
    async fn send(&self, to: &str, subject: &str, text: &str) -> anyhow::Result<()>;
}
