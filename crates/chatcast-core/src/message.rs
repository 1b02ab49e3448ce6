//! Message types — the payloads a channel dispatches.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ChatcastError, Result};
use crate::timestamp::format_sent_at;

/// What kind of payload a message carries, plus its type-specific metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Video {
        file_name: String,
        format: String,
        duration_seconds: i64,
    },
    Photo {
        file_name: String,
        format: String,
    },
    File {
        file_name: String,
        format: String,
    },
}

impl MessageKind {
    /// Label that opens the rendered description.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Video { .. } => "Video",
            Self::Photo { .. } => "Photo",
            Self::File { .. } => "File",
        }
    }
}

/// A message ready to be dispatched.
///
/// Fields are fixed at construction. Constructors take the send time
/// explicitly so rendering stays a pure function of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
    sent_at: NaiveDateTime,
    kind: MessageKind,
}

impl Message {
    pub fn new(content: &str, kind: MessageKind, sent_at: NaiveDateTime) -> Self {
        Self {
            content: content.to_string(),
            sent_at,
            kind,
        }
    }

    pub fn text(content: &str, sent_at: NaiveDateTime) -> Self {
        Self::new(content, MessageKind::Text, sent_at)
    }

    pub fn video(
        content: &str,
        file_name: &str,
        format: &str,
        duration_seconds: i64,
        sent_at: NaiveDateTime,
    ) -> Self {
        let kind = MessageKind::Video {
            file_name: file_name.to_string(),
            format: format.to_string(),
            duration_seconds,
        };
        Self::new(content, kind, sent_at)
    }

    pub fn photo(content: &str, file_name: &str, format: &str, sent_at: NaiveDateTime) -> Self {
        let kind = MessageKind::Photo {
            file_name: file_name.to_string(),
            format: format.to_string(),
        };
        Self::new(content, kind, sent_at)
    }

    pub fn file(content: &str, file_name: &str, format: &str, sent_at: NaiveDateTime) -> Self {
        let kind = MessageKind::File {
            file_name: file_name.to_string(),
            format: format.to_string(),
        };
        Self::new(content, kind, sent_at)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sent_at(&self) -> NaiveDateTime {
        self.sent_at
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Attached file name, `None` for plain text.
    pub fn file_name(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Text => None,
            MessageKind::Video { file_name, .. }
            | MessageKind::Photo { file_name, .. }
            | MessageKind::File { file_name, .. } => Some(file_name),
        }
    }

    /// Single-line description: label, content, metadata, then send time.
    pub fn render_description(&self) -> String {
        let sent_at = format_sent_at(&self.sent_at);
        match &self.kind {
            MessageKind::Text => format!("Text: {} | Sent at: {}", self.content, sent_at),
            MessageKind::Video {
                file_name,
                format,
                duration_seconds,
            } => format!(
                "Video: {} | File: {} | Format: {} | Duration: {}s | Sent at: {}",
                self.content, file_name, format, duration_seconds, sent_at
            ),
            MessageKind::Photo { file_name, format } | MessageKind::File { file_name, format } => {
                format!(
                    "{}: {} | File: {} | Format: {} | Sent at: {}",
                    self.label(),
                    self.content,
                    file_name,
                    format,
                    sent_at
                )
            }
        }
    }

    /// Stricter checks for user-supplied messages. Constructors never call this.
    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(ChatcastError::InvalidInput(
                "message content is empty".to_string(),
            ));
        }
        if let Some(name) = self.file_name()
            && name.trim().is_empty()
        {
            return Err(ChatcastError::InvalidInput(format!(
                "{} message has no file name",
                self.label().to_lowercase()
            )));
        }
        if let MessageKind::Video {
            duration_seconds, ..
        } = self.kind
            && duration_seconds <= 0
        {
            return Err(ChatcastError::InvalidInput(format!(
                "video duration must be positive, got {}s",
                duration_seconds
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 3, 0)
            .unwrap()
    }

    #[test]
    fn test_text_description() {
        let msg = Message::text("Hello, all good?", sample_time());
        assert_eq!(
            msg.render_description(),
            "Text: Hello, all good? | Sent at: 05/01/2024 09:03"
        );
    }

    #[test]
    fn test_video_description() {
        let msg = Message::video("Check our new product!", "product.mp4", "mp4", 120, sample_time());
        assert_eq!(
            msg.render_description(),
            "Video: Check our new product! | File: product.mp4 | Format: mp4 | Duration: 120s | Sent at: 05/01/2024 09:03"
        );
    }

    #[test]
    fn test_photo_description() {
        let msg = Message::photo("Look at this landscape", "landscape.jpg", "jpg", sample_time());
        assert_eq!(
            msg.render_description(),
            "Photo: Look at this landscape | File: landscape.jpg | Format: jpg | Sent at: 05/01/2024 09:03"
        );
    }

    #[test]
    fn test_file_description() {
        let msg = Message::file("Important document", "contract.pdf", "pdf", sample_time());
        assert_eq!(
            msg.render_description(),
            "File: Important document | File: contract.pdf | Format: pdf | Sent at: 05/01/2024 09:03"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let msg = Message::video("a", "b.mov", "mov", 7, sample_time());
        assert_eq!(msg.render_description(), msg.render_description());
        assert_eq!(msg.to_string(), msg.render_description());
    }

    #[test]
    fn test_permissive_construction() {
        let empty = Message::text("", sample_time());
        assert_eq!(empty.render_description(), "Text:  | Sent at: 05/01/2024 09:03");

        let odd = Message::video("x", "", "", -5, sample_time());
        assert!(odd.render_description().contains("Duration: -5s"));
        assert!(odd.render_description().contains("File:  | Format:  |"));
    }

    #[test]
    fn test_accessors() {
        let msg = Message::photo("p", "pic.png", "png", sample_time());
        assert_eq!(msg.content(), "p");
        assert_eq!(msg.sent_at(), sample_time());
        assert_eq!(msg.label(), "Photo");
        assert_eq!(msg.file_name(), Some("pic.png"));
        assert_eq!(Message::text("t", sample_time()).file_name(), None);
    }

    #[test]
    fn test_validate() {
        let t = sample_time();
        assert!(Message::text("hi", t).validate().is_ok());
        assert!(Message::video("v", "v.mp4", "mp4", 1, t).validate().is_ok());

        for bad in [
            Message::text("   ", t),
            Message::photo("p", "", "jpg", t),
            Message::video("v", "v.mp4", "mp4", 0, t),
            Message::video("v", "v.mp4", "mp4", -3, t),
        ] {
            let err = bad.validate().unwrap_err();
            assert!(matches!(err, ChatcastError::InvalidInput(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_kind_from_toml() {
        let kind: MessageKind = toml::from_str(
            "type = \"video\"\nfile_name = \"a.mp4\"\nformat = \"mp4\"\nduration_seconds = 9",
        )
        .unwrap();
        assert_eq!(
            kind,
            MessageKind::Video {
                file_name: "a.mp4".into(),
                format: "mp4".into(),
                duration_seconds: 9,
            }
        );
        let text: MessageKind = toml::from_str("type = \"text\"").unwrap();
        assert_eq!(text, MessageKind::Text);
    }
}
