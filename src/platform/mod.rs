pub mod messenger;

use anyhow::Result;
use async_trait::async_trait;

/// How a message reached the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Typed text
    Text,
    /// Button click carrying a fixed payload string
    Postback,
}

/// A message received from the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Page-scoped sender ID
    pub sender_id: String,
    /// The message text (or postback payload)
    pub text: String,
    pub kind: MessageKind,
}

/// Delivers reply text back to a platform user
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, recipient_id: &str, text: &str) -> Result<()>;

    /// Whether the sender has the credentials it needs to deliver anything.
    fn is_configured(&self) -> bool {
        true
    }
}
