mod email;
mod sms;

use crate::config::Config;
pub use email::{IEmailService, InMemoryEmailService, SendgridEmailService, SentEmail};
pub use sms::{ISmsGateway, InMemorySmsGateway, SentSms, TwilioSmsGateway};
use std::sync::Arc;

/// Third party services the application talks to
#[derive(Clone)]
pub struct Services {
    pub sms: Arc<dyn ISmsGateway>,
    pub email: Arc<dyn IEmailService>,
}

impl Services {
    /// Real gateways where credentials are configured, in-memory ones otherwise
    pub fn from_config(config: &Config) -> Self {
        let sms: Arc<dyn ISmsGateway> = match &config.twilio {
            Some(twilio) => Arc::new(TwilioSmsGateway::new(twilio.clone())),
            None => Arc::new(InMemorySmsGateway::new()),
        };
        let email: Arc<dyn IEmailService> = match &config.sendgrid {
            Some(sendgrid) => Arc::new(SendgridEmailService::new(sendgrid.clone())),
            None => Arc::new(InMemoryEmailService::new()),
        };
        Self { sms, email }
    }

    pub fn create_inmemory() -> Self {
        Self {
            sms: Arc::new(InMemorySmsGateway::new()),
            email: Arc::new(InMemoryEmailService::new()),
        }
    }
}
