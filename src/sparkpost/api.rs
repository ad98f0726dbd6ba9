use crate::errors::{ApiError, Error};

use serde::{Deserialize, Serialize};

pub const SPARKPOST_BASE_API: &str = "https://api.sparkpost.com/api/v1/";

// Request timeout, in seconds
pub(crate) const SPARKPOST_REQUEST_TIMEOUT: u64 = 30;

/// Map a SparkPost error response into the normalized API error.
/// Any error status counts as provider-reported; a body that does not
/// parse degrades to empty code/message/description fields.
pub fn map_response(
    resp: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, Error> {
    let status = resp.status();

    if !status.is_client_error() && !status.is_server_error() {
        return Ok(resp);
    }

    let body = resp.bytes()?;
    let parsed: ErrorBody = serde_json::from_slice(&body).unwrap_or_default();
    let detail = parsed.errors.into_iter().next().unwrap_or_default();

    Err(Error::BadRequest(ApiError {
        status: status.as_u16(),
        code: detail.code,
        message: detail.message,
        description: detail.description,
    }))
}

pub enum Endpoint {
    Transmissions,
}

#[inline]
pub fn build_endpoint_url(endpoint: Endpoint) -> String {
    match endpoint {
        Endpoint::Transmissions => format!("{}{}", SPARKPOST_BASE_API, "transmissions"),
    }
}

/// One transmission: recipient list plus content, built fresh per send
#[derive(Serialize, Debug, Default)]
pub struct TransmissionRequest {
    pub recipients: Vec<Recipient>,
    pub content: Content,
}

#[derive(Serialize, Debug)]
pub struct Recipient {
    pub address: Address,
}

/// Address descriptor. Visible recipients carry `name`; blind copies
/// carry `header_to` instead, echoing a visible address so the To
/// header stays intact on their copy.
#[derive(Serialize, Debug, Default, Clone)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_to: Option<String>,
}

#[derive(Serialize, Debug, Default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub subject: String,
    pub from: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inline_images: Vec<AttachmentPayload>,
}

#[derive(Serialize, Debug)]
pub struct AttachmentPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    /// Base64-encoded content
    pub data: String,
}

#[derive(Deserialize, Debug)]
pub struct TransmissionResponse {
    pub results: TransmissionResults,
}

#[derive(Deserialize, Debug)]
pub struct TransmissionResults {
    pub id: String,
    pub total_accepted_recipients: u32,
    pub total_rejected_recipients: u32,
}

#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url() {
        assert_eq!(
            build_endpoint_url(Endpoint::Transmissions),
            "https://api.sparkpost.com/api/v1/transmissions"
        );
    }

    #[test]
    fn parse_error_body() {
        let body = r#"{"errors":[{"message":"forbidden","description":"Sending not allowed","code":"1902"}]}"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].code, "1902");
        assert_eq!(parsed.errors[0].message, "forbidden");
        assert_eq!(parsed.errors[0].description, "Sending not allowed");
    }

    #[test]
    fn partial_error_body_fills_defaults() {
        let body = r#"{"errors":[{"message":"forbidden"}]}"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.errors[0].message, "forbidden");
        assert_eq!(parsed.errors[0].code, "");
        assert_eq!(parsed.errors[0].description, "");
    }

    #[test]
    fn junk_error_body_degrades_to_default() {
        let parsed: ErrorBody =
            serde_json::from_slice(b"<html>It broke</html>").unwrap_or_default();

        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn parse_transmission_response() {
        let body = r#"{"results":{"total_rejected_recipients":0,"total_accepted_recipients":1,"id":"11668787484950529"}}"#;
        let resp: TransmissionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(resp.results.id, "11668787484950529");
        assert_eq!(resp.results.total_accepted_recipients, 1);
        assert_eq!(resp.results.total_rejected_recipients, 0);
    }
}
