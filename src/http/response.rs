use std::path::Path;

use anyhow::Context;

use crate::config::ResponseConfig;

/// HTTP status codes the server can emit.
///
/// Every request is answered with the same prebuilt response, so only
/// `Ok` (200) exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use formtap::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
        }
    }
}

/// A complete response, fixed in advance of any request.
///
/// Headers are an ordered list and are emitted exactly as given: nothing is
/// added implicitly, so the canned variant really does go out with no
/// headers at all.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers, in emission order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header. Headers keep their insertion order on the wire.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response. No headers are auto-added.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// The primary response: `200 OK`, no headers, body `OK`.
    pub fn ok_canned() -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .body(b"OK".to_vec())
            .build()
    }

    /// The file-serving response: the file is read once, here, and served
    /// unchanged for the lifetime of the process. A missing file is a fatal
    /// startup condition; content that fails to parse as JSON is only
    /// warned about and still served byte-for-byte.
    pub fn json_file(path: &Path) -> anyhow::Result<Self> {
        let body = std::fs::read(path)
            .with_context(|| format!("could not read payload file {}", path.display()))?;

        if serde_json::from_slice::<serde_json::Value>(&body).is_err() {
            tracing::warn!(
                file = %path.display(),
                "payload is not well-formed JSON, serving as-is"
            );
        }

        Ok(ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/json")
            .header("Content-Length", body.len().to_string())
            .body(body)
            .build())
    }

    /// Builds the response selected by the configuration.
    pub fn from_config(cfg: &ResponseConfig) -> anyhow::Result<Self> {
        match cfg {
            ResponseConfig::Canned => Ok(Self::ok_canned()),
            ResponseConfig::JsonFile { path } => Self::json_file(path),
        }
    }
}
