use anyhow::Context as _;
use serde::Serialize;
use tracing::info;

use crate::domain::repository::Notifier;
use crate::error::RecoveryError;

/// Mail delivery for the recovery flows.
///
/// `Api` posts to a Brevo-style transactional-mail JSON endpoint. `Log`
/// writes the message to the log instead and is the local-dev default when
/// no API key is configured.
#[derive(Clone)]
pub enum Mailer {
    Api(ApiMailer),
    Log,
}

impl Notifier for Mailer {
    async fn send(&self, to_email: &str, subject: &str, body: &str) -> Result<(), RecoveryError> {
        match self {
            Self::Log => {
                info!(to_email, subject, body, "mail delivery stub");
                Ok(())
            }
            Self::Api(api) => api
                .send(to_email, subject, body)
                .await
                .map_err(RecoveryError::DeliveryFailed),
        }
    }
}

#[derive(Clone)]
pub struct ApiMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender_email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddress {
    email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    text_content: String,
}

impl ApiMailer {
    pub fn new(api_url: String, api_key: String, sender_email: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            sender_email,
        }
    }

    async fn send(&self, to_email: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        let payload = SendEmailBody {
            sender: EmailAddress {
                email: self.sender_email.clone(),
            },
            to: vec![EmailAddress {
                email: to_email.to_owned(),
            }],
            subject: subject.to_owned(),
            text_content: body.to_owned(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .context("send mail request")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("mail API returned {status}: {detail}");
        }
        Ok(())
    }
}
