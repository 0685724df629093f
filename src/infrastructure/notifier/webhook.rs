// src/infrastructure/notifier/webhook.rs
use crate::application::dto::LeadDto;
use crate::application::ports::notifier::{LeadNotifier, NotifierError};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts new-lead events to a configured webhook (mail relay, CRM hook,
/// chat integration). The caller treats delivery as fire-and-forget, so a
/// hung endpoint must give up at the timeout instead of holding the create
/// request open.
pub struct WebhookLeadNotifier {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl WebhookLeadNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, DELIVERY_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl LeadNotifier for WebhookLeadNotifier {
    async fn notify_new_lead(&self, lead: &LeadDto) -> Result<(), NotifierError> {
        let body = json!({
            "event": "lead.created",
            "lead": lead,
        });

        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|err| NotifierError(err.to_string()))?;

        response
            .error_for_status()
            .map_err(|err| NotifierError(err.to_string()))?;
        Ok(())
    }
}

/// Stand-in used when no webhook URL is configured; the lead is still
/// captured in the database, so losing the ping is acceptable.
#[derive(Default)]
pub struct LogOnlyNotifier;

#[async_trait]
impl LeadNotifier for LogOnlyNotifier {
    async fn notify_new_lead(&self, lead: &LeadDto) -> Result<(), NotifierError> {
        tracing::info!(lead_id = lead.id, slug = %lead.slug, "new lead captured (no webhook configured)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn lead() -> LeadDto {
        LeadDto {
            id: 1,
            title: "Lead".into(),
            slug: "lead".into(),
            description: "captured".into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn hung_endpoint_fails_at_the_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        // Accept connections but never answer them.
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });

        let notifier = WebhookLeadNotifier::with_timeout(url, Duration::from_millis(200));
        let outcome =
            tokio::time::timeout(Duration::from_secs(5), notifier.notify_new_lead(&lead()))
                .await
                .expect("delivery must give up well before the outer deadline");
        assert!(outcome.is_err());
    }
}
