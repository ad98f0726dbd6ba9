use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Generic outbound email model.
/// Hosts build one of these and hand it to a transport.
#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Email {
    /// Envelope sender. Exactly one mailbox; it becomes the visible
    /// From header on the provider side.
    pub from: Mailbox,

    /// Visible recipients, in insertion order
    pub to: Vec<Mailbox>,

    /// Blind-copy addresses, in insertion order
    pub bcc: Vec<String>,

    /// Reply-To, if any. Only the address reaches the provider.
    pub reply_to: Option<Mailbox>,

    /// Subject line. May contain RFC 2047 encoded words; these are
    /// decoded before transmission.
    pub subject: String,

    /// Primary body format
    pub format: EmailFormat,

    /// Plaintext body, if any
    pub text: Option<String>,

    /// HTML body, if any
    pub html: Option<String>,

    /// List of attachments, if any
    pub attachments: Vec<Attachment>,
}

impl Email {
    pub fn new() -> Email {
        Default::default()
    }
}

/// One address with an optional display name
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Mailbox {
    pub email: String,
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: &str) -> Mailbox {
        Mailbox {
            email: email.to_string(),
            name: None,
        }
    }

    pub fn named(email: &str, name: &str) -> Mailbox {
        Mailbox {
            email: email.to_string(),
            name: Some(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EmailFormat {
    Text,
    Html,
}

impl Default for EmailFormat {
    fn default() -> Self {
        EmailFormat::Text
    }
}

/// Attachment content can either live in memory or point at a file
/// that is read in full at send time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AttachmentSource {
    Bytes(Vec<u8>),
    File(PathBuf),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment filename
    pub name: String,

    /// MIME type of attachment (e.g., application/pdf)
    pub mime: String,

    /// Attachment content
    pub source: AttachmentSource,
}

impl Attachment {
    /// Attachment bytes, reading the backing file if needed.
    /// File reads are synchronous and whole-file.
    pub fn read(&self) -> Result<Vec<u8>, Error> {
        match &self.source {
            AttachmentSource::Bytes(data) => Ok(data.clone()),
            AttachmentSource::File(path) => std::fs::read(path).map_err(|e| e.into()),
        }
    }

    /// Inline images render inside the email body. The declared MIME
    /// type alone decides; content is never inspected.
    pub fn is_inline_image(&self) -> bool {
        self.mime == "image/jpeg" || self.mime == "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_image_is_declared_type_only() {
        let mut attachment = Attachment {
            name: "photo.png".to_string(),
            mime: "image/png".to_string(),
            // Not actually PNG bytes; must not matter
            source: AttachmentSource::Bytes(b"%PDF-1.4".to_vec()),
        };

        assert!(attachment.is_inline_image());

        attachment.mime = "image/jpeg".to_string();
        assert!(attachment.is_inline_image());

        attachment.mime = "image/gif".to_string();
        assert!(!attachment.is_inline_image());

        attachment.mime = "application/pdf".to_string();
        assert!(!attachment.is_inline_image());
    }

    #[test]
    fn read_in_memory_bytes() {
        let attachment = Attachment {
            name: "notes.txt".to_string(),
            mime: "text/plain".to_string(),
            source: AttachmentSource::Bytes(vec![1, 2, 3]),
        };

        assert_eq!(attachment.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn read_missing_file_is_an_io_error() {
        let attachment = Attachment {
            name: "gone.txt".to_string(),
            mime: "text/plain".to_string(),
            source: AttachmentSource::File(PathBuf::from("/nonexistent/gone.txt")),
        };

        match attachment.read() {
            Err(Error::Io(_)) => (),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
