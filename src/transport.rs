use std::collections::HashMap;

use crate::config;
use crate::email::{Email, EmailFormat};
use crate::errors::Error;
use crate::mime;
use crate::sparkpost::{api, Client};

/// Blocking transport for outbound email
pub trait Transport {
    /// Response produced by the transport
    type Ok;
    /// Error produced by the transport
    type Error;

    /// Sends the email
    fn send(&self, email: &Email) -> Result<Self::Ok, Self::Error>;
}

/// Sends email through the SparkPost transmissions API.
///
/// Holds nothing but the credential; every send builds its own client,
/// so calls are fully independent of each other.
pub struct SparkPostTransport {
    api_key: String,
}

impl SparkPostTransport {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }

    /// Build a transport from a loaded configuration map.
    /// The `api_key` setting must be present and non-empty.
    pub fn from_config(settings: &HashMap<String, String>) -> Result<Self, Error> {
        match settings.get(config::API_KEY) {
            Some(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(Error::Config(format!("{} is not set", config::API_KEY))),
        }
    }

    /// Map the email onto a transmission and submit it, blocking until
    /// SparkPost answers. The provider's response comes back as-is;
    /// provider-reported failures come back as `Error::BadRequest`.
    pub fn send(&self, email: &Email) -> Result<api::TransmissionResponse, Error> {
        let request = build_transmission(email)?;

        log::info!(
            "Sending transmission to {} recipients",
            request.recipients.len()
        );

        let client = Client::from_api_key(&self.api_key);

        client.transmit(&request).map_err(|e| {
            log::error!("Transmission failed: {}", e);
            e
        })
    }
}

impl Transport for SparkPostTransport {
    type Ok = api::TransmissionResponse;
    type Error = Error;

    fn send(&self, email: &Email) -> Result<Self::Ok, Self::Error> {
        SparkPostTransport::send(self, email)
    }
}

fn build_transmission(email: &Email) -> Result<api::TransmissionRequest, Error> {
    let mut recipients = Vec::with_capacity(email.to.len() + email.bcc.len());

    for mailbox in &email.to {
        recipients.push(api::Recipient {
            address: api::Address {
                name: mailbox.name.as_deref().map(mime::encode_word),
                email: mailbox.email.clone(),
                header_to: None,
            },
        });
    }

    // Every blind copy echoes the last visible recipient in its To
    // header; with an empty `to` list the field is omitted entirely
    let header_to = email.to.last().map(|mailbox| mailbox.email.clone());

    for address in &email.bcc {
        recipients.push(api::Recipient {
            address: api::Address {
                name: None,
                email: address.clone(),
                header_to: header_to.clone(),
            },
        });
    }

    let mut content = api::Content {
        subject: mime::decode_words(&email.subject)?,
        from: api::Address {
            name: email.from.name.as_deref().map(mime::encode_word),
            email: email.from.email.clone(),
            header_to: None,
        },
        // Reply-To display names are dropped; SparkPost takes a bare
        // address here
        reply_to: email.reply_to.as_ref().map(|mailbox| mailbox.email.clone()),
        ..Default::default()
    };

    if let EmailFormat::Html = email.format {
        content.html = email.html.clone();
    }
    content.text = email.text.clone();

    for attachment in &email.attachments {
        let data = attachment.read()?;

        let payload = api::AttachmentPayload {
            name: attachment.name.clone(),
            type_: attachment.mime.clone(),
            data: base64::encode(&data),
        };

        if attachment.is_inline_image() {
            content.inline_images.push(payload);
        } else {
            content.attachments.push(payload);
        }
    }

    Ok(api::TransmissionRequest {
        recipients,
        content,
    })
}
