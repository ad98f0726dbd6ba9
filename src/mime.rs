use crate::errors::Error;

/// Encode a header display name as an RFC 2047 encoded word.
/// Plain ASCII input passes through untouched.
pub fn encode_word(input: &str) -> String {
    if input.is_ascii() {
        return input.to_string();
    }

    format!("=?utf-8?B?{}?=", base64::encode(input.as_bytes()))
}

/// Decode any RFC 2047 encoded words (B or Q) in a header value.
/// Plain input comes back unchanged.
pub fn decode_words(value: &str) -> Result<String, Error> {
    // mailparse only decodes full headers, so wrap the value in a
    // throwaway one
    let raw = format!("Subject: {}", value);
    let (header, _) = mailparse::parse_header(raw.as_bytes())?;

    Ok(header.get_value()?)
}
