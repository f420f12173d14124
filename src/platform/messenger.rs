//! Messenger Platform plumbing: webhook payload types and the Send API client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{IncomingMessage, MessageKind, MessageSender};
use crate::config::MessengerConfig;

/// Messenger rejects text messages longer than this
pub const MAX_MESSAGE_CHARS: usize = 2000;

// ── Webhook payload ────────────────────────────────────────────────────────────

/// Top level of a webhook delivery.
///
/// Entries and events stay as raw JSON: a single malformed event (a numeric
/// `text`, a sender without an `id`) must be skipped during extraction, not
/// reject the whole batch.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub entry: Vec<Value>,
}

impl WebhookPayload {
    /// Whether this delivery comes from a page subscription
    pub fn is_page(&self) -> bool {
        self.object == "page"
    }

    /// Pull every classifiable message out of the batch.
    ///
    /// Events without a string sender id, or with neither string message text
    /// nor a string postback payload (attachments, receipts, echoes), are
    /// skipped.
    pub fn incoming_messages(&self) -> Vec<IncomingMessage> {
        let mut messages = Vec::new();

        for entry in &self.entry {
            let events = match entry.get("messaging").and_then(Value::as_array) {
                Some(events) => events,
                None => {
                    warn!("No messaging array in entry {:?}", entry.get("id"));
                    continue;
                }
            };

            for event in events {
                if let Some(message) = to_incoming(event) {
                    messages.push(message);
                } else {
                    debug!("Skipping event without text or postback payload");
                }
            }
        }

        messages
    }
}

fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(value, |v, key| v.get(key))
        .and_then(Value::as_str)
}

fn to_incoming(event: &Value) -> Option<IncomingMessage> {
    let sender_id = str_at(event, &["sender", "id"])?.to_string();

    if let Some(text) = str_at(event, &["message", "text"]) {
        info!("Message from {}: {}", sender_id, text);
        return Some(IncomingMessage {
            sender_id,
            text: text.to_string(),
            kind: MessageKind::Text,
        });
    }

    let payload = str_at(event, &["postback", "payload"])?;
    info!(
        "Postback from {} ({:?}): {}",
        sender_id,
        str_at(event, &["postback", "title"]),
        payload
    );
    Some(IncomingMessage {
        sender_id,
        text: payload.to_string(),
        kind: MessageKind::Postback,
    })
}

// ── Send API ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    recipient: Recipient<'a>,
    message: OutgoingText<'a>,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct OutgoingText<'a> {
    text: &'a str,
}

pub struct SendApiClient {
    client: reqwest::Client,
    config: MessengerConfig,
}

impl SendApiClient {
    pub fn new(config: MessengerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{}/me/messages",
            self.config.graph_api_url.trim_end_matches('/'),
            self.config.api_version
        )
    }

    async fn send_chunk(&self, token: &str, recipient_id: &str, text: &str) -> Result<()> {
        let request = SendRequest {
            recipient: Recipient { id: recipient_id },
            message: OutgoingText { text },
        };

        let url = self.messages_url();
        debug!("Sending message to {} via {}", recipient_id, url);

        let response = self
            .client
            .post(&url)
            .query(&[("access_token", token)])
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the Send API")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Send API error ({}): {}", status, error_body);
        }

        Ok(())
    }
}

#[async_trait]
impl MessageSender for SendApiClient {
    async fn send(&self, recipient_id: &str, text: &str) -> Result<()> {
        let token = self
            .config
            .page_access_token
            .as_deref()
            .context("Cannot send message: page access token is not set")?;

        info!("Sending message to {}", recipient_id);
        for chunk in split_message(text, MAX_MESSAGE_CHARS) {
            self.send_chunk(token, recipient_id, &chunk).await?;
        }
        info!("Message sent successfully to {}", recipient_id);
        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.config.page_access_token.is_some()
    }
}

/// Split long messages to fit the platform's per-message character limit.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        // Byte offset just past `max_chars` characters
        let end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let actual_end = if end < rest.len() {
            rest[..end]
                .rfind('\n')
                .or_else(|| rest[..end].rfind(' '))
                .map(|pos| pos + 1)
                .unwrap_or(end)
        } else {
            end
        };

        chunks.push(rest[..actual_end].to_string());
        rest = &rest[actual_end..];
    }

    chunks
}
