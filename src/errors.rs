use std::error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured error reported by the SparkPost API: the HTTP status of
/// the response plus the code/message/description from its error body.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub code: String,
    pub message: String,
    pub description: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SparkPost API error {} ({}): {} ({})",
            self.code,
            self.status,
            capitalize(&self.message),
            self.description
        )
    }
}

/// Error type for the transport.
/// Each variant can store a message for logging purposes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Error {
    /// The provider answered with a structured API error. These are
    /// user-attributable (bad-request class), not transport failures.
    BadRequest(ApiError),
    UrlParse(String),
    RequestTimeout,
    Request(String),
    JsonParse(String),
    HeaderDecode(String),
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BadRequest(ref e) => write!(f, "{}", e),
            Error::UrlParse(_) => f.write_str("UrlParseError"),
            Error::RequestTimeout => f.write_str("RequestTimeout"),
            Error::Request(ref msg) => write!(f, "RequestError: {}", msg),
            Error::JsonParse(ref msg) => write!(f, "JsonParseError: {}", msg),
            Error::HeaderDecode(ref msg) => write!(f, "HeaderDecodeError: {}", msg),
            Error::Io(ref msg) => write!(f, "IoError: {}", msg),
            Error::Config(ref msg) => write!(f, "ConfigError: {}", msg),
        }
    }
}

impl error::Error for Error {}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::UrlParse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::RequestTimeout
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(err: serde_json::error::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<mailparse::MailParseError> for Error {
    fn from(err: mailparse::MailParseError) -> Self {
        Self::HeaderDecode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

fn capitalize(input: &str) -> String {
    let mut chars = input.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_format() {
        let err = ApiError {
            status: 403,
            code: "1902".to_string(),
            message: "forbidden".to_string(),
            description: "Sending not allowed".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "SparkPost API error 1902 (403): Forbidden (Sending not allowed)"
        );
    }

    #[test]
    fn api_error_capitalizes_first_letter_only() {
        let err = ApiError {
            status: 420,
            code: "1902".to_string(),
            message: "message GENERATION rejected".to_string(),
            description: "".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "SparkPost API error 1902 (420): Message GENERATION rejected ()"
        );
    }

    #[test]
    fn api_error_empty_fields() {
        let err = ApiError {
            status: 500,
            code: String::new(),
            message: String::new(),
            description: String::new(),
        };

        assert_eq!(err.to_string(), "SparkPost API error  (500):  ()");
    }

    #[test]
    fn bad_request_displays_the_api_error() {
        let err = Error::BadRequest(ApiError {
            status: 403,
            code: "1902".to_string(),
            message: "forbidden".to_string(),
            description: "Sending not allowed".to_string(),
        });

        assert_eq!(
            err.to_string(),
            "SparkPost API error 1902 (403): Forbidden (Sending not allowed)"
        );
    }
}
