use super::ISmsGateway;
use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct SentSms {
    pub to: String,
    pub body: String,
}

/// Keeps the messages instead of sending them
pub struct InMemorySmsGateway {
    sent: Mutex<Vec<SentSms>>,
}

impl InMemorySmsGateway {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentSms> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemorySmsGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ISmsGateway for InMemorySmsGateway {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<()> {
        info!("Text message to {} kept in memory", to);
        self.sent.lock().unwrap().push(SentSms {
            to: to.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_messages() {
        let gateway = InMemorySmsGateway::new();
        gateway.send("+2347181354770", "hello").await.unwrap();
        assert_eq!(
            gateway.sent(),
            vec![SentSms {
                to: "+2347181354770".into(),
                body: "hello".into()
            }]
        );
    }
}
