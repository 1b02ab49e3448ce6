//! Channels — the chat platforms a message is dispatched through.
//!
//! No transport is involved: sending a message writes a short transcript
//! (header, description, footer) to whatever sink the caller provides.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChatcastError, Result};
use crate::message::Message;

/// Footer written after every dispatched message.
pub const SUCCESS_FOOTER: &str = "--- Message sent successfully! ---";

/// Platform identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    WhatsApp,
    Telegram,
    Facebook,
    Instagram,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WhatsApp => write!(f, "WhatsApp"),
            Self::Telegram => write!(f, "Telegram"),
            Self::Facebook => write!(f, "Facebook"),
            Self::Instagram => write!(f, "Instagram"),
        }
    }
}

fn default_is_phone_number() -> bool {
    true
}

/// A destination on one platform. Holds no state between sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum Channel {
    WhatsApp {
        recipient: String,
    },
    Telegram {
        recipient: String,
        /// Show the recipient as a phone number rather than a username.
        #[serde(default = "default_is_phone_number")]
        is_phone_number: bool,
    },
    Facebook {
        recipient: String,
    },
    Instagram {
        recipient: String,
    },
}

impl Channel {
    pub fn whatsapp(recipient: &str) -> Self {
        Self::WhatsApp {
            recipient: recipient.to_string(),
        }
    }

    pub fn telegram(recipient: &str, is_phone_number: bool) -> Self {
        Self::Telegram {
            recipient: recipient.to_string(),
            is_phone_number,
        }
    }

    pub fn facebook(recipient: &str) -> Self {
        Self::Facebook {
            recipient: recipient.to_string(),
        }
    }

    pub fn instagram(recipient: &str) -> Self {
        Self::Instagram {
            recipient: recipient.to_string(),
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Self::WhatsApp { .. } => Platform::WhatsApp,
            Self::Telegram { .. } => Platform::Telegram,
            Self::Facebook { .. } => Platform::Facebook,
            Self::Instagram { .. } => Platform::Instagram,
        }
    }

    pub fn recipient(&self) -> &str {
        match self {
            Self::WhatsApp { recipient }
            | Self::Telegram { recipient, .. }
            | Self::Facebook { recipient }
            | Self::Instagram { recipient } => recipient,
        }
    }

    /// `Number` for phone-addressed destinations, `User` for handles.
    pub fn recipient_label(&self) -> &'static str {
        match self {
            Self::WhatsApp { .. } => "Number",
            Self::Telegram {
                is_phone_number, ..
            } => {
                if *is_phone_number {
                    "Number"
                } else {
                    "User"
                }
            }
            Self::Facebook { .. } | Self::Instagram { .. } => "User",
        }
    }

    pub fn header(&self) -> String {
        format!(
            "Sending via {} - {}: {}",
            self.platform(),
            self.recipient_label(),
            self.recipient()
        )
    }

    /// Full transcript for one send, blank separator line included.
    pub fn transcript(&self, message: &Message) -> String {
        format!(
            "{}\n{}\n{}\n\n",
            self.header(),
            message.render_description(),
            SUCCESS_FOOTER
        )
    }

    /// "Send" a message: write its transcript to `out`.
    ///
    /// Fails only if the sink does.
    pub fn send<W: Write + ?Sized>(&self, message: &Message, out: &mut W) -> Result<()> {
        out.write_all(self.transcript(message).as_bytes())?;
        debug!(
            platform = %self.platform(),
            recipient = self.recipient(),
            kind = message.label(),
            "message dispatched"
        );
        Ok(())
    }

    /// Stricter checks for user-supplied destinations.
    pub fn validate(&self) -> Result<()> {
        if self.recipient().trim().is_empty() {
            return Err(ChatcastError::InvalidInput(format!(
                "{} recipient is empty",
                self.platform()
            )));
        }
        Ok(())
    }
}
