//! Outbound mail submission
//!
//! Thin wrapper over the HTTP client: a message is posted to an ordered
//! list of submission hosts with per-host credentials and a shared
//! timeout. The first host that accepts the message wins.

use crate::PlatformError;
use cirrus_core::config;
use serde::Serialize;
use std::time::Duration;

/// Credentials for one submission host
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One mail submission endpoint
#[derive(Debug, Clone)]
pub struct MailHost {
    /// Submission endpoint URL
    pub url: String,
    pub credentials: Option<Credentials>,
}

/// An outbound message
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Sends messages through an ordered host list
#[derive(Debug)]
pub struct MailSender {
    hosts: Vec<MailHost>,
    timeout: Duration,
}

impl MailSender {
    /// Create a sender with the configured default timeout.
    pub fn new(hosts: Vec<MailHost>) -> Self {
        Self::with_timeout(hosts, Duration::from_secs(config().mail.timeout_secs))
    }

    pub fn with_timeout(hosts: Vec<MailHost>, timeout: Duration) -> Self {
        Self { hosts, timeout }
    }

    pub fn hosts(&self) -> &[MailHost] {
        &self.hosts
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Submit `message`, trying hosts in order.
    ///
    /// Fails without touching the network when the host list is empty or
    /// the message has no recipients. Otherwise returns the first
    /// success, or an aggregate error naming the last failure.
    pub fn send(&self, message: &Message) -> Result<(), PlatformError> {
        if self.hosts.is_empty() {
            return Err(PlatformError::Mail("no mail hosts configured".to_string()));
        }
        if message.to.is_empty() {
            return Err(PlatformError::Mail("message has no recipients".to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| PlatformError::Mail(format!("client setup failed: {e}")))?;

        let mut last_error = String::new();
        for host in &self.hosts {
            let mut request = client.post(&host.url).json(message);
            if let Some(credentials) = &host.credentials {
                request =
                    request.basic_auth(&credentials.username, Some(&credentials.password));
            }
            match request.send() {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!(host = %host.url, "mail accepted");
                    return Ok(());
                }
                Ok(response) => {
                    last_error = format!("{}: HTTP {}", host.url, response.status());
                    tracing::warn!(host = %host.url, status = %response.status(), "mail rejected");
                }
                Err(e) => {
                    last_error = format!("{}: {e}", host.url);
                    tracing::warn!(host = %host.url, error = %e, "mail submission failed");
                }
            }
        }

        Err(PlatformError::Mail(format!(
            "all {} hosts failed, last error: {last_error}",
            self.hosts.len()
        )))
    }
}
