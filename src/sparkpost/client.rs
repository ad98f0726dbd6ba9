use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use super::api;

use crate::errors::Error;

/// Thin synchronous client for the SparkPost API. Submission always
/// blocks until the provider answers or the transport gives up.
pub struct Client {
    api_key: String,
    client: reqwest::blocking::Client,
}

impl Client {
    pub fn from_api_key(api_key: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(api::SPARKPOST_REQUEST_TIMEOUT))
            .build()
            .unwrap();
        Self {
            api_key: api_key.to_string(),
            client,
        }
    }

    #[inline]
    fn request(&self, endpoint: api::Endpoint, body: String) -> Result<Bytes, Error> {
        let url = api::build_endpoint_url(endpoint);

        let req = self
            .client
            .post(reqwest::Url::parse(&url)?)
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        // Map response into an error if applicable
        let resp = api::map_response(req.send()?);

        Ok(resp?.bytes()?)
    }

    /// Submit a single transmission
    pub fn transmit(
        &self,
        request: &api::TransmissionRequest,
    ) -> Result<api::TransmissionResponse, Error> {
        let body = serde_json::to_string(request)?;
        let resp = self.request(api::Endpoint::Transmissions, body)?;

        serde_json::from_slice(&resp).map_err(|e| e.into())
    }
}
