use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;

use crate::models::ContactSubmission;
use crate::submission::{fields, FieldMap};

use super::{interpret, Relay, RelayError, RelayOutcome, Verdict};

/// Relay that posts form-encoded rows to a Google Apps Script web app.
pub struct ScriptRelay {
    client: reqwest::Client,
    url: String,
}

impl ScriptRelay {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::from(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Single POST, no retries. Returns the reply body whatever the status
    /// code, since the script may answer success with a redirect page.
    async fn deliver(&self, submission: &ContactSubmission) -> Result<String, RelayError> {
        let resp = self
            .client
            .post(&self.url)
            .form(submission)
            .send()
            .await
            .map_err(|e| RelayError::from(format!("Relay request failed: {e}")))?;

        let status_code = resp.status().as_u16();
        tracing::debug!("Relay responded with status {status_code}");

        resp.text()
            .await
            .map_err(|e| RelayError::from(format!("Relay response unreadable: {e}")))
    }
}

#[async_trait]
impl Relay for ScriptRelay {
    async fn submit(&self, raw: &FieldMap) -> RelayOutcome {
        let ignored = fields::ignored_keys(raw);
        if !ignored.is_empty() {
            tracing::debug!("Ignoring unrecognized contact fields: {ignored:?}");
        }

        let submission =
            ContactSubmission::stamped(fields::extract(raw), Local::now().naive_local());

        let body = match self.deliver(&submission).await {
            Ok(body) => body,
            Err(e) => {
                // Fail open: the visitor is told the message went through.
                tracing::warn!("Reporting success for undelivered contact submission: {e}");
                return RelayOutcome::success();
            }
        };

        let verdict = interpret(&body);
        match &verdict {
            Verdict::Confirmed => {
                tracing::info!("Contact submission recorded");
            }
            Verdict::Unparseable => {
                tracing::warn!(
                    "Reporting success for unconfirmed contact submission: reply was not JSON ({} bytes)",
                    body.len()
                );
            }
            Verdict::NullReply => {
                tracing::warn!("Reporting success for unconfirmed contact submission: reply was JSON null");
            }
            Verdict::Rejected(message) => {
                tracing::warn!(
                    "Contact submission rejected by script: {}",
                    message.as_deref().unwrap_or("no message")
                );
            }
        }

        RelayOutcome::from(&verdict)
    }
}
