//! Result envelope returned by every API operation.
//!
//! An operation never fails just because the server said no: non-2xx
//! responses come back as an [`ApiResponse`] with `data: None` and the raw
//! response attached, so callers decide whether to branch on status or
//! raise. Errors are reserved for local argument rejection, network
//! exhaustion, and 2xx bodies that fail validation.

use crate::errors::{IconikError, IconikResult};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// The raw HTTP response underlying an operation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body text.
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response.
    pub fn new(status: u16, headers: HeaderMap, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true for 5xx statuses.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Parses the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> IconikResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            IconikError::deserialization(format!("Failed to deserialize response body: {}", e))
                .with_cause(e)
        })
    }
}

/// Envelope pairing the raw response with the decoded, validated data.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The underlying HTTP response.
    pub raw: RawResponse,
    /// Decoded response DTO. `None` for non-2xx responses and for
    /// operations that declare no response DTO.
    pub data: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes a raw response into the envelope.
    ///
    /// A 2xx body that fails validation is an error, never a silent `None`.
    pub fn decode(raw: RawResponse) -> IconikResult<Self> {
        if !raw.ok() {
            return Ok(Self { raw, data: None });
        }
        let data = raw.json()?;
        Ok(Self {
            raw,
            data: Some(data),
        })
    }
}

impl<T> ApiResponse<T> {
    /// Wraps a raw response with no declared response DTO.
    pub fn empty(raw: RawResponse) -> Self {
        Self { raw, data: None }
    }

    /// Returns true when the underlying response was 2xx.
    pub fn ok(&self) -> bool {
        self.raw.ok()
    }

    /// Converts the envelope into its data, turning a non-2xx response into
    /// a typed error. Convenience for callers who prefer raising.
    pub fn into_data(self) -> IconikResult<T> {
        if !self.raw.ok() {
            return Err(IconikError::from_status(self.raw.status, self.raw.body));
        }
        self.data.ok_or_else(|| {
            IconikError::deserialization("Operation declares no response data")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Widget {
        id: String,
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse::new(status, HeaderMap::new(), body.to_string())
    }

    #[test]
    fn test_decode_ok() {
        let envelope: ApiResponse<Widget> = ApiResponse::decode(raw(200, r#"{"id":"w1"}"#)).unwrap();
        assert!(envelope.ok());
        assert_eq!(envelope.data.unwrap().id, "w1");
    }

    #[test]
    fn test_decode_non_2xx_is_not_an_error() {
        let envelope: ApiResponse<Widget> = ApiResponse::decode(raw(404, r#"{"error":"gone"}"#)).unwrap();
        assert!(!envelope.ok());
        assert!(envelope.data.is_none());
        assert_eq!(envelope.raw.status, 404);
        assert!(envelope.raw.body.contains("gone"));
    }

    #[test]
    fn test_decode_invalid_body_raises() {
        let result: IconikResult<ApiResponse<Widget>> = ApiResponse::decode(raw(200, "not json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_into_data() {
        let envelope: ApiResponse<Widget> = ApiResponse::decode(raw(200, r#"{"id":"w1"}"#)).unwrap();
        assert_eq!(envelope.into_data().unwrap(), Widget { id: "w1".into() });

        let envelope: ApiResponse<Widget> = ApiResponse::decode(raw(403, "forbidden")).unwrap();
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn test_empty_envelope() {
        let envelope: ApiResponse<Widget> = ApiResponse::empty(raw(204, ""));
        assert!(envelope.ok());
        assert!(envelope.data.is_none());
    }
}
